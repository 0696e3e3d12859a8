//! Host-facing selection value.
//!
//! Rebuilt from scratch from the selected list after every trigger: one
//! entry per selected item, in list order, each marked selected.

use serde::{Deserialize, Serialize};

use super::reconcile::SelectedList;

/// One option of the host's selection value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalOption {
    pub value: String,
    pub text: String,
    pub selected: bool,
}

/// The host's authoritative selection value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalValue {
    pub options: Vec<CanonicalOption>,
}

impl CanonicalValue {
    /// Values of selected options, in order
    pub fn selected_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect()
    }

    /// Display texts of selected options, in order
    pub fn selected_texts(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.text.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Rebuild the canonical value from the selected list
///
/// The option value is the entry's identity key: the label under label
/// identity, the option value under value identity.
pub fn sync(selected: &SelectedList) -> CanonicalValue {
    CanonicalValue {
        options: selected
            .entries()
            .iter()
            .map(|entry| CanonicalOption {
                value: entry.key.clone(),
                text: entry.label.clone(),
                selected: true,
            })
            .collect(),
    }
}
