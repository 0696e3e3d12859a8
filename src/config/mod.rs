//! Configuration module for the picker
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREE_MULTISELECT_*)
//! 3. Project config (.tree-multiselect.toml)
//! 4. User config (<config dir>/tree-multiselect/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::PickerConfig;

// Re-export IdentityKey from domain layer
pub use crate::domain::reconcile::IdentityKey;
