//! Structural rendering of nested values into expandable trees.
//!
//! A value is classified once into a [`Shape`], and the renderer turns shapes
//! into [`TreeNode`]s. Containers only materialize children when their path is
//! in the [`ExpansionSet`], so a collapsed subtree costs one node no matter how
//! deep it goes. Toggling a path never re-renders by itself: the host renders
//! the unchanged root again and the new expansion state decides which
//! subtrees appear.
//!
//! ```
//! use nestview::{render, ExpansionSet, NodePath};
//! use serde_json::json;
//!
//! let value = json!({"tags": ["a", "b"]});
//! let mut expansion = ExpansionSet::new();
//!
//! let collapsed = render(&value, &NodePath::root(), &expansion);
//! assert!(!collapsed.is_expanded());
//!
//! expansion.toggle("");
//! let open = render(&value, &NodePath::root(), &expansion);
//! assert_eq!(open.outline(), "▾ {1}\n  ▸ tags: [2]");
//! ```

use std::borrow::Cow;

use tracing::trace;

use crate::config::DEFAULT_MAX_TREE_DEPTH;
use crate::expansion::{ExpansionSet, NodePath};

/// The single classification step applied to every value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<'a, T> {
    Null,
    Bool(bool),
    /// A number, as display text.
    Number(String),
    String(&'a str),
    Array(&'a [T]),
    /// Members in iteration order.
    Object(Vec<(Cow<'a, str>, &'a T)>),
    /// Anything else, as display text.
    Other(String),
}

/// Values that can be classified into a [`Shape`].
pub trait Structured: Sized {
    fn shape(&self) -> Shape<'_, Self>;
}

impl Structured for serde_json::Value {
    fn shape(&self) -> Shape<'_, Self> {
        use serde_json::Value;

        match self {
            Value::Null => Shape::Null,
            Value::Bool(b) => Shape::Bool(*b),
            Value::Number(n) => Shape::Number(n.to_string()),
            Value::String(s) => Shape::String(s.as_str()),
            Value::Array(items) => Shape::Array(items.as_slice()),
            Value::Object(map) => Shape::Object(
                map.iter()
                    .map(|(key, value)| (Cow::Borrowed(key.as_str()), value))
                    .collect(),
            ),
        }
    }
}

/// YAML adds shapes JSON lacks: non-finite numbers, non-string keys and
/// tagged values. Non-finite numbers and tagged values fall back to
/// [`Shape::Other`]; keys are shown as their YAML text.
impl Structured for serde_yaml::Value {
    fn shape(&self) -> Shape<'_, Self> {
        use serde_yaml::Value;

        match self {
            Value::Null => Shape::Null,
            Value::Bool(b) => Shape::Bool(*b),
            Value::Number(n) if n.is_nan() || n.is_infinite() => Shape::Other(n.to_string()),
            Value::Number(n) => Shape::Number(n.to_string()),
            Value::String(s) => Shape::String(s.as_str()),
            Value::Sequence(items) => Shape::Array(items.as_slice()),
            Value::Mapping(map) => Shape::Object(
                map.iter()
                    .map(|(key, value)| (yaml_key_text(key), value))
                    .collect(),
            ),
            Value::Tagged(tagged) => Shape::Other(
                serde_yaml::to_string(self)
                    .map(|text| text.trim_end().to_string())
                    .unwrap_or_else(|_| tagged.tag.to_string()),
            ),
        }
    }
}

fn yaml_key_text(key: &serde_yaml::Value) -> Cow<'_, str> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Null => Cow::Borrowed("null"),
        other => Cow::Owned(
            serde_yaml::to_string(other)
                .map(|text| text.trim_end().to_string())
                .unwrap_or_default(),
        ),
    }
}

/// Kind of a leaf node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Displayed quoted.
    String,
    Number,
    Boolean,
    /// Fallback for values with no structural meaning.
    Other,
}

impl PrimitiveKind {
    /// Lowercase name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Other => "other",
        }
    }
}

/// A rendered node.
///
/// `children` is `Some` exactly when `expanded` is `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Null,
    Primitive {
        kind: PrimitiveKind,
        text: String,
    },
    Array {
        path: NodePath,
        len: usize,
        expanded: bool,
        children: Option<Vec<TreeNode>>,
    },
    Object {
        path: NodePath,
        keys: Vec<String>,
        expanded: bool,
        children: Option<Vec<(String, TreeNode)>>,
    },
}

impl TreeNode {
    /// Path of a container node, the one to pass to `toggle`.
    pub fn path(&self) -> Option<&NodePath> {
        match self {
            TreeNode::Array { path, .. } | TreeNode::Object { path, .. } => Some(path),
            TreeNode::Null | TreeNode::Primitive { .. } => None,
        }
    }

    /// Returns `true` for arrays and objects.
    pub fn is_container(&self) -> bool {
        self.path().is_some()
    }

    /// Returns `true` if this container materialized its children.
    pub fn is_expanded(&self) -> bool {
        match self {
            TreeNode::Array { expanded, .. } | TreeNode::Object { expanded, .. } => *expanded,
            TreeNode::Null | TreeNode::Primitive { .. } => false,
        }
    }

    /// One-line summary: leaf text (strings quoted), `[len]` or `{keys}`.
    pub fn label(&self) -> String {
        match self {
            TreeNode::Null => "null".to_string(),
            TreeNode::Primitive {
                kind: PrimitiveKind::String,
                text,
            } => serde_json::Value::from(text.as_str()).to_string(),
            TreeNode::Primitive { text, .. } => text.clone(),
            TreeNode::Array { len, .. } => format!("[{}]", len),
            TreeNode::Object { keys, .. } => format!("{{{}}}", keys.len()),
        }
    }

    /// Indented text outline of the materialized tree.
    ///
    /// Containers are marked `▸` (collapsed) or `▾` (expanded); members are
    /// prefixed with their index or key.
    pub fn outline(&self) -> String {
        let mut lines = Vec::new();
        self.write_outline(None, 0, &mut lines);
        lines.join("\n")
    }

    fn write_outline(&self, name: Option<&str>, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        let marker = if !self.is_container() {
            ""
        } else if self.is_expanded() {
            "▾ "
        } else {
            "▸ "
        };
        let prefix = name.map(|n| format!("{}: ", n)).unwrap_or_default();
        lines.push(format!("{}{}{}{}", indent, marker, prefix, self.label()));

        match self {
            TreeNode::Array {
                children: Some(children),
                ..
            } => {
                for (i, child) in children.iter().enumerate() {
                    child.write_outline(Some(&i.to_string()), depth + 1, lines);
                }
            }
            TreeNode::Object {
                children: Some(children),
                ..
            } => {
                for (key, child) in children {
                    child.write_outline(Some(key), depth + 1, lines);
                }
            }
            _ => {}
        }
    }
}

/// Renders values against an expansion set, counting the nodes it visits.
#[derive(Debug)]
pub struct TreeRenderer<'s> {
    expansion: &'s ExpansionSet,
    max_depth: usize,
    visited: usize,
}

impl<'s> TreeRenderer<'s> {
    /// Creates a renderer with the default depth limit.
    pub fn new(expansion: &'s ExpansionSet) -> Self {
        TreeRenderer {
            expansion,
            max_depth: DEFAULT_MAX_TREE_DEPTH,
            visited: 0,
        }
    }

    /// Containers this many levels below the render root stay collapsed.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Renders `value` as the root of a tree.
    pub fn render<T: Structured>(&mut self, value: &T) -> TreeNode {
        self.render_at(value, &NodePath::root())
    }

    /// Renders `value` as if it sat at `path` in a larger tree.
    pub fn render_at<T: Structured>(&mut self, value: &T, path: &NodePath) -> TreeNode {
        self.render_node(value, path.clone(), 0)
    }

    /// Number of nodes classified so far.
    pub fn nodes_visited(&self) -> usize {
        self.visited
    }

    fn render_node<T: Structured>(&mut self, value: &T, path: NodePath, depth: usize) -> TreeNode {
        self.visited += 1;

        match value.shape() {
            Shape::Null => TreeNode::Null,
            Shape::Bool(b) => leaf(PrimitiveKind::Boolean, b.to_string()),
            Shape::Number(text) => leaf(PrimitiveKind::Number, text),
            Shape::String(s) => leaf(PrimitiveKind::String, s.to_string()),
            Shape::Other(text) => leaf(PrimitiveKind::Other, text),
            Shape::Array(items) => {
                let expanded = self.expands(&path, depth);
                let children = if expanded {
                    Some(
                        items
                            .iter()
                            .enumerate()
                            .map(|(i, item)| self.render_node(item, path.index(i), depth + 1))
                            .collect(),
                    )
                } else {
                    None
                };
                TreeNode::Array {
                    path,
                    len: items.len(),
                    expanded,
                    children,
                }
            }
            Shape::Object(members) => {
                let expanded = self.expands(&path, depth);
                let keys = members.iter().map(|(key, _)| key.to_string()).collect();
                let children = if expanded {
                    Some(
                        members
                            .iter()
                            .map(|(key, member)| {
                                let child = self.render_node(*member, path.key(key), depth + 1);
                                (key.to_string(), child)
                            })
                            .collect(),
                    )
                } else {
                    None
                };
                TreeNode::Object {
                    path,
                    keys,
                    expanded,
                    children,
                }
            }
        }
    }

    fn expands(&self, path: &NodePath, depth: usize) -> bool {
        if !self.expansion.is_expanded(path) {
            return false;
        }
        if depth >= self.max_depth {
            trace!(%path, depth, "depth limit reached, keeping node collapsed");
            return false;
        }
        true
    }
}

fn leaf(kind: PrimitiveKind, text: String) -> TreeNode {
    TreeNode::Primitive { kind, text }
}

/// Renders `value` at `path` with the default depth limit.
pub fn render<T: Structured>(value: &T, path: &NodePath, expansion: &ExpansionSet) -> TreeNode {
    TreeRenderer::new(expansion).render_at(value, path)
}
