//! Ordered selected list with minimal churn.
//!
//! After every trigger the checked leaves are read in depth-first order
//! and compared with the previous list by identity key:
//!
//! - entries whose key is no longer checked are removed in place
//! - keys that became checked are appended at the tail, in tree order
//! - entries that survive keep their relative order
//!
//! The key is the leaf label by default, so identically-labelled leaves
//! share one entry. `IdentityKey::Value` keys by option value instead.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};

use super::tree::{NodeId, Tree};

/// What identifies an entry of the selected list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdentityKey {
    /// Display label; leaves sharing a label collapse into one entry
    #[default]
    Label,
    /// Option value; unique within an option set
    Value,
}

/// One entry of the selected list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedEntry {
    /// Identity key (label or value, see [`IdentityKey`])
    pub key: String,
    /// Display text
    pub label: String,
}

impl SelectedEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Entry keyed by its own label
    pub fn labelled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            key: label.clone(),
            label,
        }
    }

    /// Entry for a leaf under the given identity policy
    pub fn for_leaf(tree: &Tree, leaf: NodeId, identity: IdentityKey) -> PickerResult<Self> {
        let node = tree.leaf(leaf)?;
        let label = node.label();
        let key = match (identity, node.option()) {
            (IdentityKey::Value, Some(option)) => option.value(),
            _ => label,
        };
        Ok(Self::new(key, label))
    }
}

/// Checked leaves as entries, in depth-first order
pub fn current_selections(tree: &Tree, identity: IdentityKey) -> PickerResult<Vec<SelectedEntry>> {
    tree.checked_leaves()
        .into_iter()
        .map(|leaf| SelectedEntry::for_leaf(tree, leaf, identity))
        .collect()
}

/// Keys added and removed by one reconciliation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl ReconcileOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// The ordered list of currently selected entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedList {
    entries: Vec<SelectedEntry>,
}

impl SelectedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// List with the given entries, dropping later repeats of a key
    pub fn from_entries(entries: impl IntoIterator<Item = SelectedEntry>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            if !list.contains(&entry.key) {
                list.entries.push(entry);
            }
        }
        list
    }

    pub fn entries(&self) -> &[SelectedEntry] {
        &self.entries
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bring the list in line with `current`
    ///
    /// `released` holds keys of leaves unchecked by the triggering
    /// operation. They are removed even if another leaf with the same key
    /// is still checked, and are not re-added in this pass.
    pub fn reconcile(&mut self, current: &[SelectedEntry], released: &[String]) -> ReconcileOutcome {
        let current_keys: HashSet<&str> = current.iter().map(|e| e.key.as_str()).collect();
        let released: HashSet<&str> = released.iter().map(String::as_str).collect();
        let mut outcome = ReconcileOutcome::default();

        self.entries.retain(|entry| {
            let keep =
                current_keys.contains(entry.key.as_str()) && !released.contains(entry.key.as_str());
            if !keep {
                outcome.removed.push(entry.key.clone());
            }
            keep
        });

        for entry in current {
            if released.contains(entry.key.as_str()) || self.contains(&entry.key) {
                continue;
            }
            outcome.added.push(entry.key.clone());
            self.entries.push(entry.clone());
        }

        outcome
    }

    /// Replace the order wholesale with an externally chosen one
    ///
    /// `order` must name every key exactly once; otherwise the list is left
    /// unchanged.
    pub fn reorder<S: AsRef<str>>(&mut self, order: &[S]) -> PickerResult<()> {
        let invalid = || PickerError::InvalidReorder {
            expected: self.entries.iter().map(|e| e.key.clone()).collect(),
            actual: order.iter().map(|k| k.as_ref().to_string()).collect(),
        };

        if order.len() != self.entries.len() {
            return Err(invalid());
        }

        let mut by_key: HashMap<&str, &SelectedEntry> =
            self.entries.iter().map(|e| (e.key.as_str(), e)).collect();
        let mut reordered = Vec::with_capacity(order.len());
        for key in order {
            match by_key.remove(key.as_ref()) {
                Some(entry) => reordered.push(entry.clone()),
                None => return Err(invalid()),
            }
        }

        self.entries = reordered;
        Ok(())
    }
}
