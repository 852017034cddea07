//! Seeker - Generic query engine for searching record collections.
//!
//! Seeker narrows, orders and windows in-memory collections. It supports:
//!
//! - Field values classified as strings, numbers, booleans or nested content
//! - Case-insensitive substring clauses combined as an any-of group
//! - Single-field ordering with a stable sort and a fixed place for absent values
//! - Pagination with limit and offset
//!
//! # Quick Start
//!
//! ```rust
//! use nestview_seeker::{Query, Value, Number};
//!
//! struct Task {
//!     name: String,
//!     priority: i32,
//! }
//!
//! fn accessor<'a>(task: &'a Task, field: &str) -> Value<'a> {
//!     match field {
//!         "name" => Value::String(&task.name),
//!         "priority" => Value::Number(Number::from(task.priority)),
//!         _ => Value::None,
//!     }
//! }
//!
//! let tasks = vec![
//!     Task { name: "Write docs".into(), priority: 3 },
//!     Task { name: "Fix bug".into(), priority: 5 },
//!     Task { name: "Fix typo".into(), priority: 1 },
//! ];
//!
//! let query = Query::new()
//!     .search(["name"], "FIX")
//!     .order_desc("priority")
//!     .build();
//!
//! let results = query.filter(&tasks, accessor);
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].name, "Fix bug");
//! ```
//!
//! # Ordering
//!
//! | Pair | Rule |
//! |------|------|
//! | same kind | numeric, lexicographic, `false < true` |
//! | different kinds | `Bool < Number < String < Nested` |
//! | absent vs present | absent first, in both directions |

mod clause;
mod ordering;
mod query;
mod traits;
mod value;

// Re-export public API
pub use clause::Clause;
pub use ordering::{compare_by_ordering, compare_values, Dir, OrderBy};
pub use query::Query;
pub use traits::Seekable;
pub use value::{Number, Value};
