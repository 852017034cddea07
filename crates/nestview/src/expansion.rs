//! Expansion state for nested-value trees, keyed by structural path.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

/// Identifies a node within a nested value.
///
/// The root is the empty path. Each step into an array appends `.index`,
/// each step into an object appends `.key`. Paths are only ever used as set
/// keys; nothing parses them back into steps.
///
/// ```
/// use nestview::NodePath;
///
/// let path = NodePath::root().key("users").index(2).key("email");
/// assert_eq!(path.as_str(), ".users.2.email");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(String);

impl NodePath {
    /// Delimiter between steps.
    pub const SEPARATOR: char = '.';

    /// The path of the root node, the empty string.
    pub fn root() -> Self {
        NodePath(String::new())
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of the element at `index` of the array at this path.
    pub fn index(&self, index: usize) -> Self {
        NodePath(format!("{}{}{}", self.0, Self::SEPARATOR, index))
    }

    /// Path of the member `key` of the object at this path.
    pub fn key(&self, key: &str) -> Self {
        NodePath(format!("{}{}{}", self.0, Self::SEPARATOR, key))
    }

    /// The path as its set key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets the set be queried with plain `&str` paths.
impl Borrow<str> for NodePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodePath {
    fn from(path: &str) -> Self {
        NodePath(path.to_string())
    }
}

impl From<String> for NodePath {
    fn from(path: String) -> Self {
        NodePath(path)
    }
}

/// The set of expanded node paths.
///
/// A path is expanded iff it is in the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    expanded: HashSet<NodePath>,
}

impl ExpansionSet {
    /// Creates a set with nothing expanded.
    pub fn new() -> Self {
        ExpansionSet::default()
    }

    /// Returns `true` if `path` is in the set.
    pub fn is_expanded(&self, path: impl AsRef<str>) -> bool {
        self.expanded.contains(path.as_ref())
    }

    /// Flips membership of `path`; returns whether it is now expanded.
    pub fn toggle(&mut self, path: impl AsRef<str>) -> bool {
        let path = path.as_ref();
        if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(NodePath::from(path));
            true
        }
    }

    /// Adds `path`; already expanded paths are left alone.
    pub fn expand(&mut self, path: impl AsRef<str>) {
        let path = path.as_ref();
        if !self.expanded.contains(path) {
            self.expanded.insert(NodePath::from(path));
        }
    }

    /// Removes `path` if present.
    pub fn collapse(&mut self, path: impl AsRef<str>) {
        self.expanded.remove(path.as_ref());
    }

    /// Forgets every expanded path.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    /// Number of expanded paths.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Returns `true` if nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Iterates the expanded paths in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &NodePath> {
        self.expanded.iter()
    }
}
