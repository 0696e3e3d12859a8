//! Property tests for hierarchy construction.

use std::collections::HashSet;

use proptest::prelude::*;

use tree_multiselect::domain::builder::build_tree_from_records;
use tree_multiselect::RawOption;

fn raw_option() -> impl Strategy<Value = RawOption> {
    ("([ab](/[ab]){0,2})?", "[a-z]{1,3}")
        .prop_map(|(section, value)| RawOption::new(section, value))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every record becomes exactly one leaf.
    #[test]
    fn property_leaf_count_equals_record_count(
        records in proptest::collection::vec(raw_option(), 0..=24),
    ) {
        let tree = build_tree_from_records(&records, "/");
        prop_assert_eq!(tree.leaf_count(), records.len());
    }

    /// PROPERTY: No two sibling sections share a title.
    #[test]
    fn property_sibling_sections_are_unique(
        records in proptest::collection::vec(raw_option(), 0..=24),
    ) {
        let tree = build_tree_from_records(&records, "/");

        let mut parents = vec![None];
        parents.extend(
            tree.walk()
                .into_iter()
                .filter(|e| tree.node(e.id).unwrap().is_section())
                .map(|e| Some(e.id)),
        );

        for parent in parents {
            let mut seen = HashSet::new();
            for child in tree.children_of(parent).unwrap() {
                let node = tree.node(*child).unwrap();
                if node.is_section() {
                    prop_assert!(
                        seen.insert(node.label().to_string()),
                        "duplicate section '{}' under {:?}",
                        node.label(),
                        parent
                    );
                }
            }
        }
    }

    /// PROPERTY: Leaves keep record order in a depth-first walk of one section.
    #[test]
    fn property_leaves_keep_arrival_order_per_section(
        values in proptest::collection::vec("[a-z]{1,3}", 0..=12),
    ) {
        let records: Vec<RawOption> = values.iter().map(|v| RawOption::new("S", v.as_str())).collect();
        let tree = build_tree_from_records(&records, "/");

        let labels: Vec<String> = tree
            .leaves()
            .into_iter()
            .map(|id| tree.node(id).unwrap().label().to_string())
            .collect();
        prop_assert_eq!(labels, values);
    }
}
