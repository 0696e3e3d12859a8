//! Tri-state selection cascades over the tree arena.
//!
//! Only leaves store a checked flag. A section's checkbox is derived by
//! scanning the leaves below it, so there is no second source of truth
//! that could drift from leaf state:
//!
//! - all leaves checked: `Checked`
//! - no leaf checked: `Unchecked`
//! - anything in between: `Partial` (shown as an unchecked box)
//!
//! Checking a section checks every leaf below it. Unchecking any leaf
//! leaves each ancestor section displaying unchecked. Nothing checks a
//! section on the user's behalf: its box only shows checked once every
//! leaf below it is.

use serde::Serialize;

use crate::error::PickerResult;

use super::tree::{NodeId, Tree};

/// Display state of a node's checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    /// Leaf checked, or every leaf below a section checked
    Checked,
    /// Leaf unchecked, or no leaf below a section checked
    Unchecked,
    /// Some but not all leaves below a section checked
    Partial,
}

impl SelectionState {
    /// Whether the checkbox itself is ticked
    pub fn is_checked(self) -> bool {
        self == SelectionState::Checked
    }
}

/// Effect of one cascade
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeOutcome {
    /// Value the cascade applied
    pub checked: bool,
    /// Leaves whose flag actually flipped, depth-first
    pub changed: Vec<NodeId>,
    /// Sections forced to display unchecked, nearest first per leaf
    pub cleared: Vec<NodeId>,
}

impl CascadeOutcome {
    /// True when no leaf changed
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Set a single leaf
pub fn set_leaf(tree: &mut Tree, leaf: NodeId, checked: bool) -> PickerResult<CascadeOutcome> {
    tree.leaf(leaf)?;
    apply(tree, vec![leaf], checked)
}

/// Set every leaf below `section`, through nested sections
pub fn set_section(
    tree: &mut Tree,
    section: NodeId,
    checked: bool,
) -> PickerResult<CascadeOutcome> {
    tree.section(section)?;
    let leaves = tree.leaves_under(section)?;
    apply(tree, leaves, checked)
}

fn apply(tree: &mut Tree, leaves: Vec<NodeId>, checked: bool) -> PickerResult<CascadeOutcome> {
    let mut outcome = CascadeOutcome {
        checked,
        ..CascadeOutcome::default()
    };

    for leaf in leaves {
        let previous = tree.set_checked(leaf, checked)?;
        if previous == checked {
            continue;
        }
        outcome.changed.push(leaf);

        if !checked {
            for ancestor in tree.ancestors(leaf)? {
                if !outcome.cleared.contains(&ancestor) {
                    outcome.cleared.push(ancestor);
                }
            }
        }
    }

    Ok(outcome)
}

/// Derived display state of any node
pub fn state_of(tree: &Tree, id: NodeId) -> PickerResult<SelectionState> {
    let node = tree.node(id)?;
    if let Some(checked) = node.checked() {
        return Ok(if checked {
            SelectionState::Checked
        } else {
            SelectionState::Unchecked
        });
    }

    let leaves = tree.leaves_under(id)?;
    let mut checked = 0;
    for leaf in &leaves {
        if tree.node(*leaf)?.checked() == Some(true) {
            checked += 1;
        }
    }

    Ok(if leaves.is_empty() || checked == 0 {
        SelectionState::Unchecked
    } else if checked == leaves.len() {
        SelectionState::Checked
    } else {
        SelectionState::Partial
    })
}
