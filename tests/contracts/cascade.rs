//! Cascade contracts (CASCADE-001 through CASCADE-004)
//!
//! Section toggles reach every leaf below; unchecking a leaf always clears
//! the checked display of its ancestors.

use tree_multiselect::{PickerError, SelectionState};

use crate::common::*;

/// CONTRACT CASCADE-001: Checking a section checks every descendant leaf
#[test]
fn contract_section_check_reaches_nested_leaves() {
    let mut picker = picker(&nested_branches());
    let a = picker.find("A").unwrap();
    let leaf1 = picker.find("A/B/leaf1").unwrap();
    let leaf2 = picker.find("A/C/leaf2").unwrap();

    let outcome = picker.set_section(a, true).unwrap();

    let cascade = outcome.cascade.unwrap();
    assert_eq!(cascade.changed, vec![leaf1, leaf2]);
    assert_eq!(picker.state_of(leaf1).unwrap(), SelectionState::Checked);
    assert_eq!(picker.state_of(leaf2).unwrap(), SelectionState::Checked);
    assert_eq!(picker.state_of(a).unwrap(), SelectionState::Checked);
}

/// CONTRACT CASCADE-002: Unchecking one leaf clears every ancestor's checked display
#[test]
fn contract_leaf_uncheck_clears_ancestors() {
    let mut picker = picker(&nested_branches());
    let a = picker.find("A").unwrap();
    let b = picker.find("A/B").unwrap();
    let leaf1 = picker.find("A/B/leaf1").unwrap();
    let leaf2 = picker.find("A/C/leaf2").unwrap();
    picker.set_section(a, true).unwrap();

    let outcome = picker.set_leaf(leaf1, false).unwrap();

    let cascade = outcome.cascade.unwrap();
    assert_eq!(cascade.cleared, vec![b, a]);
    assert_ne!(picker.state_of(a).unwrap(), SelectionState::Checked);
    assert_eq!(picker.state_of(b).unwrap(), SelectionState::Unchecked);
    assert_eq!(picker.state_of(leaf2).unwrap(), SelectionState::Checked);
}

/// CONTRACT CASCADE-003: Checking every leaf by hand never stores a section flag
#[test]
fn contract_section_display_is_derived() {
    let mut picker = picker(&nested_branches());
    let a = picker.find("A").unwrap();
    let leaf1 = picker.find("A/B/leaf1").unwrap();
    let leaf2 = picker.find("A/C/leaf2").unwrap();

    picker.set_leaf(leaf1, true).unwrap();
    assert_eq!(picker.state_of(a).unwrap(), SelectionState::Partial);

    picker.set_leaf(leaf2, true).unwrap();
    assert_eq!(picker.state_of(a).unwrap(), SelectionState::Checked);

    picker.set_section(a, false).unwrap();
    assert_eq!(picker.state_of(a).unwrap(), SelectionState::Unchecked);
    assert!(picker.tree().checked_leaves().is_empty());
}

/// CONTRACT CASCADE-004: Operating on the wrong node fails without side effects
#[test]
fn contract_invalid_node_fails_fast() {
    let mut picker = picker(&nested_branches());
    let a = picker.find("A").unwrap();
    let leaf1 = picker.find("A/B/leaf1").unwrap();

    assert!(matches!(
        picker.set_leaf(a, true),
        Err(PickerError::NotALeaf { .. })
    ));
    assert!(matches!(
        picker.set_section(leaf1, true),
        Err(PickerError::NotASection { .. })
    ));

    assert!(picker.tree().checked_leaves().is_empty());
    assert!(picker.selected().is_empty());
}
