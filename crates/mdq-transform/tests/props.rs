//! Property tests for the codec laws the fixes rely on.

use proptest::prelude::*;

use mdq_model::{Cell, Report, join_values, split_values};
use mdq_transform::field;

proptest! {
    /// `join(split(x)) == x` for any cell text assembled from components.
    #[test]
    fn codec_round_trips(components in prop::collection::vec("[a-zA-Z0-9 .,-]{0,8}", 1..5)) {
        let raw = components.join("||");
        prop_assert_eq!(join_values(&split_values(&raw)), raw);
    }

    /// The whitespace fix is idempotent on arbitrary input.
    #[test]
    fn whitespace_fix_is_idempotent(raw in "[a-z \t]{0,24}(\\|\\|[a-z \t]{0,24}){0,3}") {
        let mut report = Report::new();
        let once = field::whitespace(&Cell::present(raw), "dc.title", &mut report);
        let twice = field::whitespace(&once, "dc.title", &mut report);
        prop_assert_eq!(once, twice);
    }

    /// After separator repair no component is empty and none contains `|`.
    #[test]
    fn separator_fix_postconditions(raw in "[a-c|]{0,16}") {
        let mut report = Report::new();
        let fixed = field::separators(&Cell::present(raw), "dc.subject", &mut report);
        let text = fixed.as_str().expect("separator fix keeps the cell present");
        if !text.is_empty() {
            for component in split_values(text) {
                prop_assert!(!component.is_empty());
                prop_assert!(!component.contains('|'));
            }
        }
    }

    /// The duplicate fix keeps the first occurrence of every component and
    /// never reorders survivors.
    #[test]
    fn duplicate_fix_keeps_first_occurrences(components in prop::collection::vec("[a-c]{1,2}", 1..6)) {
        let raw = components.join("||");
        let mut report = Report::new();
        let fixed = field::duplicates(&Cell::present(&raw), "dc.subject", &mut report);
        let text = fixed.as_str().unwrap().to_string();
        let survivors: Vec<&str> = split_values(&text);
        let mut expected: Vec<&str> = Vec::new();
        for component in components.iter().map(String::as_str) {
            if !expected.contains(&component) {
                expected.push(component);
            }
        }
        prop_assert_eq!(survivors, expected);
    }
}
