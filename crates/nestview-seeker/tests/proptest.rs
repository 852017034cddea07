//! Property-based tests for seeker using proptest.

use proptest::prelude::*;
use nestview_seeker::{Dir, Number, Query, Value};
use std::cmp::Ordering;

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone)]
struct TestItem {
    value: Option<i64>,
    name: String,
}

fn item_accessor<'a>(item: &'a TestItem, field: &str) -> Value<'a> {
    match field {
        "value" => item
            .value
            .map(|v| Value::Number(Number::I64(v)))
            .unwrap_or(Value::None),
        "name" => Value::String(&item.name),
        _ => Value::None,
    }
}

fn test_item_strategy() -> impl Strategy<Value = TestItem> {
    (prop::option::of(-20i64..20), "[a-zA-Z]{1,8}")
        .prop_map(|(value, name)| TestItem { value, name })
}

fn position_of(items: &[TestItem], item: &TestItem) -> Option<usize> {
    items.iter().position(|x| std::ptr::eq(x, item))
}

const TWO_53: i64 = 9_007_199_254_740_992;

/// Numbers of every variant, clustered where `f64` stops holding every integer.
fn number_strategy() -> impl Strategy<Value = Number> {
    prop_oneof![
        (-3i64..=3).prop_map(|d| Number::I64(TWO_53 + d)),
        (-3i64..=3).prop_map(|d| Number::U64((TWO_53 + d) as u64)),
        (-3i64..=3).prop_map(|d| Number::I64(-TWO_53 + d)),
        (-2i64..=2).prop_map(|d| Number::F64((TWO_53 + 2 * d) as f64)),
        (-2i64..=2).prop_map(|d| Number::F64((-TWO_53 + 2 * d) as f64)),
        (-4i64..4).prop_map(Number::I64),
        (-8i32..8).prop_map(|n| Number::F64(n as f64 / 2.0)),
        Just(Number::U64(u64::MAX)),
        Just(Number::F64(u64::MAX as f64)),
    ]
}

fn rank(a: Number, b: Number) -> Ordering {
    a.compare(b).unwrap_or(Ordering::Equal)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Search results are a subset of the input, in input order.
    #[test]
    fn search_yields_ordered_subset(
        items in prop::collection::vec(test_item_strategy(), 0..60),
        needle in "[a-zA-Z]{0,3}",
    ) {
        let query = Query::new().search(["name", "value"], &needle).build();
        let results = query.filter(&items, item_accessor);

        prop_assert!(results.len() <= items.len());
        let positions: Vec<usize> = results
            .iter()
            .filter_map(|r| position_of(&items, r))
            .collect();
        prop_assert_eq!(positions.len(), results.len());
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Every result contains the needle in some searched field.
    #[test]
    fn search_results_contain_needle(
        items in prop::collection::vec(test_item_strategy(), 0..60),
        needle in "[a-z]{1,2}",
    ) {
        let query = Query::new().search(["name"], &needle).build();
        for item in query.filter(&items, item_accessor) {
            prop_assert!(item.name.to_lowercase().contains(&needle));
        }
        prop_assert_eq!(
            query.count(&items, item_accessor),
            items.iter().filter(|i| i.name.to_lowercase().contains(&needle)).count()
        );
    }

    /// Sorting yields a permutation: same multiset of items.
    #[test]
    fn ordering_is_a_permutation(
        items in prop::collection::vec(test_item_strategy(), 0..60),
        descending in any::<bool>(),
    ) {
        let dir = if descending { Dir::Desc } else { Dir::Asc };
        let query = Query::new().order_by("value", dir).build();
        let results = query.filter(&items, item_accessor);

        prop_assert_eq!(results.len(), items.len());
        let mut positions: Vec<usize> = results
            .iter()
            .filter_map(|r| position_of(&items, r))
            .collect();
        positions.sort_unstable();
        prop_assert_eq!(positions, (0..items.len()).collect::<Vec<_>>());
    }

    /// Ordering is stable and keeps absent values first in both directions.
    #[test]
    fn ordering_is_stable(
        items in prop::collection::vec(test_item_strategy(), 0..60),
        descending in any::<bool>(),
    ) {
        let dir = if descending { Dir::Desc } else { Dir::Asc };
        let query = Query::new().order_by("value", dir).build();
        let results = query.filter(&items, item_accessor);

        for pair in results.windows(2) {
            let (prev, curr) = (pair[0], pair[1]);
            match (prev.value, curr.value) {
                (Some(_), None) => prop_assert!(false, "absent value after present value"),
                (None, Some(_)) => {}
                (Some(a), Some(b)) if a != b => {
                    let ordered = if descending { a > b } else { a < b };
                    prop_assert!(ordered);
                }
                _ => {
                    // Equal keys keep their input order
                    prop_assert!(position_of(&items, prev) < position_of(&items, curr));
                }
            }
        }
    }

    /// Offset + limit select a contiguous window of the ordered results.
    #[test]
    fn window_is_contiguous_slice(
        items in prop::collection::vec(test_item_strategy(), 0..60),
        offset in 0usize..70,
        limit in 1usize..20,
    ) {
        let ordered = Query::new().order_asc("name").build();
        let windowed = ordered.clone().offset(offset).limit(limit).build();

        let all = ordered.filter(&items, item_accessor);
        let page = windowed.filter(&items, item_accessor);

        let expected: Vec<&TestItem> = all
            .iter()
            .skip(offset)
            .take(limit)
            .copied()
            .collect();
        prop_assert_eq!(page.len(), expected.len());
        for (a, b) in page.iter().zip(expected.iter()) {
            prop_assert!(std::ptr::eq(*a, *b));
        }
    }
}

proptest! {
    /// Number comparison is antisymmetric and transitive across variants.
    #[test]
    fn number_comparison_is_a_total_order(
        a in number_strategy(),
        b in number_strategy(),
        c in number_strategy(),
    ) {
        prop_assert_eq!(rank(a, b), rank(b, a).reverse());
        if rank(a, b) != Ordering::Greater && rank(b, c) != Ordering::Greater {
            prop_assert_ne!(rank(a, c), Ordering::Greater);
        }
        if rank(a, b) == Ordering::Equal && rank(b, c) == Ordering::Equal {
            prop_assert_eq!(rank(a, c), Ordering::Equal);
        }
    }

    /// Sorting mixed numbers leaves no adjacent pair out of order.
    #[test]
    fn mixed_numbers_sort_in_order(
        numbers in prop::collection::vec(number_strategy(), 0..80),
        descending in any::<bool>(),
    ) {
        fn accessor<'a>(n: &'a Number, _field: &str) -> Value<'a> {
            Value::Number(*n)
        }

        let dir = if descending { Dir::Desc } else { Dir::Asc };
        let sorted = Query::new().order_by("n", dir).build().filter(&numbers, accessor);
        for pair in sorted.windows(2) {
            let expected = if descending { Ordering::Less } else { Ordering::Greater };
            prop_assert_ne!(rank(*pair[0], *pair[1]), expected);
        }
    }
}

// ============================================================================
// Additional edge case tests
// ============================================================================

#[test]
fn empty_collection_returns_empty() {
    let items: Vec<TestItem> = vec![];
    let query = Query::new().or_contains("name", "a").build();

    assert!(query.filter(&items, item_accessor).is_empty());
    assert_eq!(query.count(&items, item_accessor), 0);
    assert!(!query.any(&items, item_accessor));
    assert!(query.position(&items, item_accessor).is_none());
}

#[test]
fn limit_zero_returns_empty() {
    let items = vec![TestItem {
        value: Some(1),
        name: "a".into(),
    }];
    let query = Query::new().limit(0).build();

    assert!(query.filter(&items, item_accessor).is_empty());
}
