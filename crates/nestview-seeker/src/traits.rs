//! The [`Seekable`] trait for items that expose named fields.

use crate::value::Value;

/// Trait for types that can be queried by field name.
///
/// JSON objects implement it out of the box, so a collection of records can
/// be handed straight to a [`Query`](crate::Query):
///
/// ```
/// use nestview_seeker::{Query, Seekable};
/// use serde_json::{json, Map, Value as Json};
///
/// let rows: Vec<Map<String, Json>> = vec![
///     json!({"name": "Ada", "age": 36}).as_object().cloned().unwrap_or_default(),
///     json!({"name": "Grace", "age": 85}).as_object().cloned().unwrap_or_default(),
/// ];
///
/// let query = Query::new().or_contains("name", "gr").build();
/// let found = query.filter(&rows, Map::<String, Json>::accessor);
/// assert_eq!(found.len(), 1);
/// ```
///
/// # Manual Implementation
///
/// ```
/// use nestview_seeker::{Seekable, Value, Number};
///
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// impl Seekable for Task {
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "priority" => Value::Number(Number::U64(self.priority as u64)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Seekable {
    /// Returns the value of a field for query comparison, or [`Value::None`]
    /// if the field doesn't exist.
    fn seeker_field_value(&self, field: &str) -> Value<'_>;

    /// Returns a static accessor function suitable for use with
    /// [`Query::filter`](crate::Query::filter).
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.seeker_field_value(field)
    }
}

impl Seekable for serde_json::Map<String, serde_json::Value> {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        self.get(field).map(Value::from_json).unwrap_or(Value::None)
    }
}

impl Seekable for serde_json::Value {
    /// Objects are looked up by key; any other node has no fields.
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match self {
            serde_json::Value::Object(map) => map.seeker_field_value(field),
            _ => Value::None,
        }
    }
}
