//! Runtime value types for field comparison.
//!
//! The [`Value`] enum is the classified value of one field of one item, as
//! handed to the query engine by an accessor function. It borrows from the
//! item, so classifying a field never copies string or nested content.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Runtime value for comparison, borrowed from the source item.
///
/// # Example
///
/// ```
/// use nestview_seeker::{Value, Number};
///
/// struct Row {
///     name: String,
///     count: u32,
/// }
///
/// fn accessor<'a>(row: &'a Row, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&row.name),
///         "count" => Value::Number(Number::from(row.count)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Array or object content, kept as the original JSON node.
    Nested(&'a serde_json::Value),
    /// Field not present or null.
    None,
}

impl<'a> Value<'a> {
    /// Classifies a JSON node. `null` becomes [`Value::None`].
    pub fn from_json(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::None,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(Number::from(n)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => Value::Nested(value),
        }
    }

    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` if this is an array or object.
    pub fn is_nested(&self) -> bool {
        matches!(self, Value::Nested(_))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the nested JSON node, if present.
    pub fn as_nested(&self) -> Option<&'a serde_json::Value> {
        match self {
            Value::Nested(v) => Some(v),
            _ => None,
        }
    }

    /// The text a substring search runs against.
    ///
    /// Strings are used as-is, numbers and booleans in their display form,
    /// nested content as compact JSON. `None` has no text and never matches.
    pub fn search_text(&self) -> Option<Cow<'a, str>> {
        match self {
            Value::String(s) => Some(Cow::Borrowed(s)),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Nested(v) => Some(Cow::Owned(v.to_string())),
            Value::None => None,
        }
    }

    /// Position of this value's kind in the cross-kind ordering.
    pub(crate) fn kind_rank(&self) -> u8 {
        match self {
            Value::None => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Nested(_) => 4,
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
///
/// Comparisons between different numeric types are handled by converting
/// to the appropriate common type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    fn integer(self) -> Option<i128> {
        match self {
            Number::I64(n) => Some(n as i128),
            Number::U64(n) => Some(n as i128),
            Number::F64(_) => None,
        }
    }

    fn float(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers by exact value, whatever their variants.
    ///
    /// Integers are never rounded through `f64`, so `U64(2^53 + 1)` sorts
    /// after `F64(2^53)`. Only a NaN makes the result `None`.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self.integer(), other.integer()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (Some(a), None) => compare_integer_float(a, other.float()),
            (None, Some(b)) => compare_integer_float(b, self.float()).map(Ordering::reverse),
            (None, None) => self.float().partial_cmp(&other.float()),
        }
    }
}

/// Exact comparison of an integer with a float.
fn compare_integer_float(integer: i128, float: f64) -> Option<Ordering> {
    // Bounds of every i64 and u64: [-2^63, 2^64)
    const LOWEST: f64 = -9_223_372_036_854_775_808.0;
    const BEYOND: f64 = 18_446_744_073_709_551_616.0;

    if float.is_nan() {
        return None;
    }
    if float < LOWEST {
        return Some(Ordering::Greater);
    }
    if float >= BEYOND {
        return Some(Ordering::Less);
    }

    // In range, the whole part converts to i128 without loss
    let whole = float.trunc();
    match integer.cmp(&(whole as i128)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        unequal => Some(unequal),
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            // Same text serde_json would print for the source value
            Number::F64(n) => match serde_json::Number::from_f64(*n) {
                Some(json) => write!(f, "{}", json),
                None => write!(f, "{}", n),
            },
        }
    }
}

impl From<&serde_json::Number> for Number {
    fn from(n: &serde_json::Number) -> Self {
        if let Some(u) = n.as_u64() {
            Number::U64(u)
        } else if let Some(i) = n.as_i64() {
            Number::I64(i)
        } else {
            Number::F64(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}
