//! Records and the cells they present.

use std::borrow::Cow;

use serde_json::Value as Json;

use crate::error::Result;

/// One row of the collection: field name to arbitrary JSON value, in
/// insertion order.
pub type Record = serde_json::Map<String, Json>;

/// Parses a JSON array of objects into records.
///
/// ```
/// let records = nestview::parse_records(r#"[{"id": 1}, {"id": 2, "tags": []}]"#).unwrap();
/// assert_eq!(records.len(), 2);
/// ```
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(json)?)
}

/// How a single cell should be presented.
#[derive(Debug, Clone, PartialEq)]
pub enum CellView<'a> {
    /// Null or missing; the host draws its placeholder.
    Empty,
    /// An array or object; the host offers a drill-down.
    Nested(&'a Json),
    /// A primitive, as display text (strings unquoted).
    Text(Cow<'a, str>),
}

impl<'a> CellView<'a> {
    /// Classifies `record[field]`.
    pub fn of(record: &'a Record, field: &str) -> Self {
        match record.get(field) {
            None | Some(Json::Null) => CellView::Empty,
            Some(value @ (Json::Array(_) | Json::Object(_))) => CellView::Nested(value),
            Some(Json::String(s)) => CellView::Text(Cow::Borrowed(s)),
            Some(Json::Number(n)) => CellView::Text(Cow::Owned(n.to_string())),
            Some(Json::Bool(b)) => CellView::Text(Cow::Owned(b.to_string())),
        }
    }

    /// Returns `true` for null or missing cells.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellView::Empty)
    }

    /// The display text of a primitive cell.
    pub fn text(&self) -> Option<&str> {
        match self {
            CellView::Text(text) => Some(&**text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Json) -> Record {
        match value {
            Json::Object(map) => map,
            _ => Record::new(),
        }
    }

    #[test]
    fn parse_records_keeps_key_order() {
        let records = parse_records(r#"[{"zeta": 1, "alpha": 2}]"#).unwrap();
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn parse_records_rejects_non_arrays() {
        assert!(parse_records(r#"{"id": 1}"#).is_err());
        assert!(parse_records(r#"[1, 2]"#).is_err());
        assert!(parse_records("not json").is_err());
    }

    #[test]
    fn cell_classification() {
        let row = record(json!({
            "name": "Ada",
            "age": 36,
            "admin": false,
            "manager": null,
            "tags": ["x"],
            "address": {"city": "London"}
        }));

        assert_eq!(CellView::of(&row, "name").text(), Some("Ada"));
        assert_eq!(CellView::of(&row, "age").text(), Some("36"));
        assert_eq!(CellView::of(&row, "admin").text(), Some("false"));
        assert!(CellView::of(&row, "manager").is_empty());
        assert!(CellView::of(&row, "missing").is_empty());
        assert_eq!(CellView::of(&row, "tags"), CellView::Nested(&json!(["x"])));
        assert!(matches!(CellView::of(&row, "address"), CellView::Nested(_)));
    }
}
