//! Property tests for the trigger pipeline.

use std::collections::HashSet;

use proptest::prelude::*;

use tree_multiselect::{IdentityKey, OptionSet, PickerConfig, RawOption, TreeMultiselect};

#[derive(Debug, Clone)]
enum Op {
    Leaf(usize, bool),
    Section(usize, bool),
    Rotate(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<usize>(), any::<bool>()).prop_map(|(i, c)| Op::Leaf(i, c)),
        (any::<usize>(), any::<bool>()).prop_map(|(i, c)| Op::Section(i, c)),
        any::<usize>().prop_map(Op::Rotate),
    ]
}

/// Labels come from a tiny alphabet so collisions are common
fn raw_option() -> impl Strategy<Value = RawOption> {
    ("([ab](/[ab]){0,1})?", "[a-z]{1,4}", "[FB]")
        .prop_map(|(section, value, label)| RawOption::new(section, value).with_label(label))
}

fn identity() -> impl Strategy<Value = IdentityKey> {
    prop_oneof![Just(IdentityKey::Label), Just(IdentityKey::Value)]
}

fn run(picker: &mut TreeMultiselect, op: &Op) {
    let tree = picker.tree();
    match op {
        Op::Leaf(i, checked) => {
            let leaves = tree.leaves();
            if !leaves.is_empty() {
                let leaf = leaves[i % leaves.len()];
                picker.set_leaf(leaf, *checked).unwrap();
            }
        }
        Op::Section(i, checked) => {
            let sections: Vec<_> = tree
                .walk()
                .into_iter()
                .map(|e| e.id)
                .filter(|id| tree.node(*id).unwrap().is_section())
                .collect();
            if !sections.is_empty() {
                let section = sections[i % sections.len()];
                picker.set_section(section, *checked).unwrap();
            }
        }
        Op::Rotate(n) => {
            let mut keys: Vec<String> = picker
                .selected()
                .keys()
                .into_iter()
                .map(str::to_string)
                .collect();
            if !keys.is_empty() {
                let len = keys.len();
                keys.rotate_left(n % len);
            }
            picker.reorder(&keys).unwrap();
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After every trigger the canonical value equals the selected list.
    #[test]
    fn property_canonical_matches_after_every_trigger(
        records in proptest::collection::vec(raw_option(), 0..=12),
        ops in proptest::collection::vec(op(), 0..=24),
        identity in identity(),
    ) {
        let config = PickerConfig::default()
            .with_sortable(true)
            .with_identity(identity);
        let mut picker = TreeMultiselect::new(&OptionSet::new(records), config);

        for op in &ops {
            run(&mut picker, op);

            prop_assert_eq!(picker.canonical().selected_values(), picker.selected().keys());
            prop_assert!(picker.canonical().options.iter().all(|o| o.selected));
        }
    }

    /// PROPERTY: The selected list never holds duplicates or unchecked keys.
    #[test]
    fn property_selected_list_is_subset_of_checked(
        records in proptest::collection::vec(raw_option(), 0..=12),
        ops in proptest::collection::vec(op(), 0..=24),
        identity in identity(),
    ) {
        let config = PickerConfig::default()
            .with_sortable(true)
            .with_identity(identity);
        let mut picker = TreeMultiselect::new(&OptionSet::new(records), config);

        for op in &ops {
            run(&mut picker, op);

            let tree = picker.tree();
            let checked: HashSet<String> = tree
                .checked_leaves()
                .into_iter()
                .map(|id| {
                    let option = tree.node(id).unwrap().option().unwrap();
                    match identity {
                        IdentityKey::Label => option.label().to_string(),
                        IdentityKey::Value => option.value().to_string(),
                    }
                })
                .collect();

            let keys = picker.selected().keys();
            let unique: HashSet<&str> = keys.iter().copied().collect();
            prop_assert_eq!(unique.len(), keys.len());
            for key in keys {
                prop_assert!(checked.contains(key), "'{}' selected but not checked", key);
            }
        }
    }

    /// PROPERTY: Under value identity the list holds every checked leaf.
    #[test]
    fn property_value_identity_lists_every_checked_leaf(
        values in proptest::collection::hash_set("[a-z]{1,4}", 0..=10),
        ops in proptest::collection::vec(op(), 0..=24),
    ) {
        let records: Vec<RawOption> = values
            .iter()
            .enumerate()
            .map(|(i, v)| RawOption::new(if i % 2 == 0 { "a" } else { "b/c" }, v.as_str()).with_label("Same"))
            .collect();
        let config = PickerConfig::default()
            .with_sortable(true)
            .with_identity(IdentityKey::Value);
        let mut picker = TreeMultiselect::new(&OptionSet::new(records), config);

        for op in &ops {
            run(&mut picker, op);
            prop_assert_eq!(picker.selected().len(), picker.tree().checked_leaves().len());
        }
    }
}
