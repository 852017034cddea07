//! Property-based tests for the view pipeline and expansion state.

use proptest::prelude::*;
use serde_json::{json, Value as Json};

use nestview::{ExpansionSet, Record, TabularView, ViewConfig};

// ============================================================================
// Test helpers
// ============================================================================

fn field_value() -> impl Strategy<Value = Json> {
    prop_oneof![
        Just(Json::Null),
        any::<bool>().prop_map(Json::from),
        (-50i64..50).prop_map(Json::from),
        "[a-cA-C]{0,4}".prop_map(Json::from),
        prop::collection::vec("[a-c]{1,2}", 0..3).prop_map(|v| json!(v)),
    ]
}

fn record_strategy() -> impl Strategy<Value = Record> {
    prop::collection::btree_map("[a-d]", field_value(), 0..4)
        .prop_map(|fields| fields.into_iter().collect())
}

fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..40)
}

fn position_of(records: &[Record], record: &Record) -> Option<usize> {
    records.iter().position(|r| std::ptr::eq(r, record))
}

fn loaded(records: Vec<Record>, page_size: usize) -> TabularView {
    let mut view = TabularView::new(&ViewConfig::default().rows_per_page(page_size));
    view.set_records(records);
    view
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// An empty query passes every record through in order.
    #[test]
    fn empty_query_is_identity(records in records_strategy()) {
        let view = loaded(records, 10);
        let filtered = view.filtered_view();

        prop_assert_eq!(filtered.len(), view.records().len());
        for (i, record) in filtered.iter().enumerate() {
            prop_assert_eq!(position_of(view.records(), record), Some(i));
        }
    }

    /// Filtering yields an ordered subset of the records.
    #[test]
    fn filter_is_ordered_subset(records in records_strategy(), query in "[a-c]{1,2}") {
        let mut view = loaded(records, 10);
        view.set_search_query(query);

        let positions: Vec<usize> = view
            .filtered_view()
            .iter()
            .filter_map(|r| position_of(view.records(), r))
            .collect();
        prop_assert_eq!(positions.len(), view.filtered_view().len());
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Sorting permutes the filtered view.
    #[test]
    fn sort_is_permutation(
        records in records_strategy(),
        field in "[a-d]",
        clicks in 1usize..4,
    ) {
        let mut view = loaded(records, 10);
        for _ in 0..clicks {
            view.set_sort(&field);
        }

        let mut sorted: Vec<usize> = view
            .sorted_view()
            .iter()
            .filter_map(|r| position_of(view.records(), r))
            .collect();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..view.records().len()).collect::<Vec<_>>());
    }

    /// Every page is a bounded, contiguous window of the sorted view.
    #[test]
    fn pages_are_bounded_windows(
        records in records_strategy(),
        page_size in 1usize..8,
        page in 0usize..12,
        query in "[a-c]{0,1}",
    ) {
        let mut view = loaded(records, page_size);
        view.set_search_query(query);
        view.set_sort("a");
        view.set_page(page);

        let total = view.total_pages();
        let current = view.current_page();
        prop_assert!(current >= 1 && current <= total);
        prop_assert_eq!(total, view.filtered_view().len().div_ceil(page_size).max(1));

        let sorted = view.sorted_view();
        let paged = view.paged_view();
        prop_assert!(paged.len() <= page_size);

        let start = (current - 1) * page_size;
        let expected: Vec<&Record> = sorted
            .iter()
            .skip(start)
            .take(page_size)
            .copied()
            .collect();
        prop_assert_eq!(paged.len(), expected.len());
        for (a, b) in paged.iter().zip(expected.iter()) {
            prop_assert!(std::ptr::eq(*a, *b));
        }
    }

    /// Page rows point back at their own position in the collection.
    #[test]
    fn page_rows_carry_raw_positions(
        records in records_strategy(),
        page_size in 1usize..6,
        page in 1usize..8,
        field in "[a-d]",
        clicks in 0usize..3,
    ) {
        let mut view = loaded(records, page_size);
        for _ in 0..clicks {
            view.set_sort(&field);
        }
        view.set_page(page);

        let rows = view.page_rows();
        let paged = view.paged_view();
        prop_assert_eq!(rows.len(), paged.len());
        for (row, record) in rows.iter().zip(paged.iter()) {
            prop_assert!(std::ptr::eq(row.record, *record));
            prop_assert!(std::ptr::eq(row.record, &view.records()[row.index]));
        }
    }

    /// Next and previous never leave the page range.
    #[test]
    fn page_moves_stay_in_range(
        records in records_strategy(),
        moves in prop::collection::vec(any::<bool>(), 0..20),
    ) {
        let mut view = loaded(records, 3);
        for forward in moves {
            if forward {
                view.next_page();
            } else {
                view.prev_page();
            }
            let current = view.current_page();
            prop_assert!(current >= 1 && current <= view.total_pages());
        }
    }

    /// Visible columns are a subset of discovered columns, which are a
    /// subset of the keys present in the records.
    #[test]
    fn visible_columns_are_discovered_keys(
        records in records_strategy(),
        toggles in prop::collection::vec("[a-e]", 0..6),
    ) {
        let mut view = loaded(records, 10);
        for field in &toggles {
            view.toggle_column(field);
        }

        for column in view.columns().columns() {
            prop_assert!(view.records().iter().any(|r| r.contains_key(&column.field)));
        }
        for column in view.visible_columns() {
            prop_assert!(view.columns().column(&column.field).is_some());
        }
    }

    /// Toggling a path twice leaves the set as it was.
    #[test]
    fn double_toggle_is_identity(
        initial in prop::collection::hash_set("(\\.[a-c0-2]){0,3}", 0..6),
        path in "(\\.[a-c0-2]){0,3}",
    ) {
        let mut set = ExpansionSet::new();
        for p in &initial {
            set.expand(p);
        }
        let before = set.clone();

        let now = set.toggle(&path);
        prop_assert_eq!(now, !before.is_expanded(&path));
        set.toggle(&path);
        prop_assert_eq!(set, before);
    }
}
