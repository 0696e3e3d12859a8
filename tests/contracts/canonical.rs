//! Canonical value contracts (CANON-001 through CANON-002)
//!
//! After every single trigger the canonical value lists exactly the
//! selected list, in order, each entry selected.

use tree_multiselect::{OptionSet, PickerConfig, TreeMultiselect};

use crate::common::*;

/// CONTRACT CANON-001: Canonical value tracks the list after every trigger
#[test]
fn contract_canonical_matches_after_each_trigger() {
    let set: OptionSet = serde_json::from_str(PRODUCE_JSON).unwrap();
    let mut picker = TreeMultiselect::new(&set, PickerConfig::default().with_sortable(true));
    assert_canonical_matches(&picker);

    let fruit = picker.find("Fruit").unwrap();
    let citrus = picker.find("Fruit/Citrus").unwrap();
    let lime = picker.find("Fruit/Citrus/Lime").unwrap();
    let leek = picker.find("Veg/Leek").unwrap();

    picker.set_section(fruit, true).unwrap();
    assert_canonical_matches(&picker);

    picker.set_leaf(lime, false).unwrap();
    assert_canonical_matches(&picker);

    picker.reorder(&["Apple", "Leek", "Lemon"]).unwrap();
    assert_canonical_matches(&picker);

    picker.set_section(citrus, true).unwrap();
    assert_canonical_matches(&picker);

    picker.set_leaf(leek, false).unwrap();
    assert_canonical_matches(&picker);

    assert_eq!(
        picker.canonical().selected_values(),
        vec!["Apple", "Lemon", "Lime"]
    );
}

/// CONTRACT CANON-002: A rejected trigger leaves the canonical value alone
#[test]
fn contract_rejected_trigger_keeps_canonical() {
    let set: OptionSet = serde_json::from_str(PRODUCE_JSON).unwrap();
    let mut picker = TreeMultiselect::new(&set, PickerConfig::default());
    let before = picker.canonical().clone();

    assert!(picker.reorder(&["Leek", "Lemon"]).is_err());
    assert_eq!(picker.canonical(), &before);
}
