//! Core data models for the picker
//!
//! Defines the records that flow into the hierarchy builder:
//! - `SelectOption`: the immutable value/label/description triple held by a leaf
//! - `RawOption`: one host record with its delimiter-joined section path
//! - `OptionSet`: all host records plus the initially-selected values

use serde::{Deserialize, Serialize};

/// A selectable option held by a leaf of the tree
///
/// Immutable once built. `value` is unique within an option set; `label`
/// is what the selected list and the canonical value show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    value: String,
    label: String,
    description: Option<String>,
}

impl SelectOption {
    /// Create an option whose label is its value
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            description: None,
        }
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the description annotation
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Description, if present and non-empty
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// One option record as provided by the host form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOption {
    /// Delimiter-joined section path (e.g. `"Fruit/Citrus"`)
    #[serde(default)]
    pub section: String,

    /// Opaque identifier
    pub value: String,

    /// Display text, defaults to `value`
    #[serde(default)]
    pub label: Option<String>,

    /// Optional annotation
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the host marked this record as selected
    #[serde(default)]
    pub selected: bool,
}

impl RawOption {
    /// Create a record with a section path and value
    pub fn new(section: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            value: value.into(),
            label: None,
            description: None,
            selected: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Split the section path into segments
    pub fn path(&self, delimiter: &str) -> Vec<String> {
        split_section_path(&self.section, delimiter)
    }

    /// Convert into the immutable option held by a leaf
    pub fn to_option(&self) -> SelectOption {
        let mut option = SelectOption::new(self.value.clone());
        if let Some(label) = &self.label {
            option = option.with_label(label.clone());
        }
        if let Some(description) = &self.description {
            option = option.with_description(description.clone());
        }
        option
    }
}

/// All option records of one picker plus the initially-selected values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    /// Records in host order
    #[serde(default, rename = "option", alias = "options")]
    pub options: Vec<RawOption>,

    /// Values selected before the picker is built
    #[serde(default)]
    pub selected: Vec<String>,
}

impl OptionSet {
    pub fn new(options: Vec<RawOption>) -> Self {
        Self {
            options,
            selected: Vec::new(),
        }
    }

    /// Values to check on construction: the explicit list first, then
    /// records flagged `selected`, without repeats
    pub fn preselected_values(&self) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        let flagged = self
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| &o.value);
        for value in self.selected.iter().chain(flagged) {
            if !values.contains(value) {
                values.push(value.clone());
            }
        }
        values
    }
}

/// Split a delimiter-joined section path into segments
///
/// Literal substring split with no escaping. Empty segments are kept
/// (they become sections with empty titles). An empty delimiter does not
/// split at all.
pub fn split_section_path(section: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![section.to_string()];
    }
    section.split(delimiter).map(str::to_string).collect()
}
