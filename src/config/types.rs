//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::reconcile::IdentityKey;
use crate::error::PickerResult;

use super::loader::{self, ConfigWarning};

/// Picker configuration
///
/// The collapse flags are presentation state and never touch the tree or
/// the selected list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Accept externally reordered selected lists
    #[serde(default)]
    pub sortable: bool,

    /// Allow sections to be collapsed
    #[serde(default = "default_true")]
    pub collapsible: bool,

    /// Start every section collapsed (only when collapsible)
    #[serde(default, alias = "startCollapsed")]
    pub start_collapsed: bool,

    /// Literal string separating section path segments
    #[serde(default = "default_section_delimiter", alias = "sectionDelimiter")]
    pub section_delimiter: String,

    /// Reconciliation key for the selected list
    #[serde(default)]
    pub identity: IdentityKey,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            sortable: false,
            collapsible: true,
            start_collapsed: false,
            section_delimiter: default_section_delimiter(),
            identity: IdentityKey::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_section_delimiter() -> String {
    "/".to_string()
}

impl PickerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PickerResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PickerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> PickerResult<Self> {
        let (config, _path, _warnings) = loader::load_or_default_with_warnings(project_root)?;
        Ok(config)
    }

    /// Like [`PickerConfig::load_or_default`], also returning the loaded path and its warnings
    pub fn load_or_default_with_warnings(
        project_root: Option<&Path>,
    ) -> PickerResult<(Self, Option<PathBuf>, Vec<ConfigWarning>)> {
        loader::load_or_default_with_warnings(project_root)
    }

    /// Apply environment variable overrides (TREE_MULTISELECT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn with_collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    pub fn with_start_collapsed(mut self, start_collapsed: bool) -> Self {
        self.start_collapsed = start_collapsed;
        self
    }

    pub fn with_section_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.section_delimiter = delimiter.into();
        self
    }

    pub fn with_identity(mut self, identity: IdentityKey) -> Self {
        self.identity = identity;
        self
    }

    /// Whether sections start collapsed, taking `collapsible` into account
    pub fn starts_collapsed(&self) -> bool {
        self.collapsible && self.start_collapsed
    }
}
