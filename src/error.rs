//! Error types for the picker
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::tree::NodeId;

/// Result type alias for picker operations
pub type PickerResult<T> = Result<T, PickerError>;

/// Main error type for picker operations
#[derive(Error, Debug)]
pub enum PickerError {
    /// A node id that does not belong to this tree
    #[error("unknown node {id}")]
    UnknownNode { id: NodeId },

    /// A leaf operation was addressed to a section
    #[error("node {id} is a section, expected a leaf")]
    NotALeaf { id: NodeId },

    /// A section operation was addressed to a leaf
    #[error("node {id} is a leaf, expected a section")]
    NotASection { id: NodeId },

    /// Reorder trigger received while `sortable` is off
    #[error("reordering is disabled (set `sortable = true` to enable it)")]
    ReorderDisabled,

    /// Submitted order is not a permutation of the selected list
    #[error("reorder must be a permutation of the selected list: expected {expected:?}, got {actual:?}")]
    InvalidReorder {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// Option set file with an extension we cannot parse
    #[error("unsupported option set format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Option set document failed to deserialize
    #[error("invalid option set in {file}: {message}")]
    InvalidOptionSet { file: PathBuf, message: String },

    /// Config file failed to deserialize
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
