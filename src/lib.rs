//! Tree Multiselect - hierarchical multi-select picker
//!
//! Builds a tree of sections and options from flat records, cascades
//! checkbox changes through it, and keeps an ordered selected list and the
//! host's canonical selection value in step with the tree.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod parser;
pub mod picker;
pub mod render;
pub mod terminal;

// Re-exports for convenience
pub use config::{ConfigWarning, PickerConfig};
pub use domain::{
    build_tree, CanonicalOption, CanonicalValue, HierarchyBuilder, IdentityKey, NodeId,
    SelectedEntry, SelectedList, SelectionState, Tree,
};
pub use error::{PickerError, PickerResult};
pub use models::{OptionSet, RawOption, SelectOption};
pub use parser::{load_option_set, parse_option_set, OptionSetFormat};
pub use picker::{DispatchOutcome, TreeMultiselect, Trigger};
