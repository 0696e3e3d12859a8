//! Domain Layer
//!
//! The picker core: pure in-memory algorithms without I/O dependencies.
//!
//! ## Structure
//!
//! - `tree` - Arena of sections and leaves addressed by `NodeId`
//! - `builder` - Hierarchy construction from section paths
//! - `selection` - Tri-state cascade engine over the arena
//! - `reconcile` - Ordered selected list with minimal churn
//! - `canonical` - Host-facing selection value rebuilt from the selected list
//! - `ports` - Interface definitions for infrastructure (event sinks)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or terminal
//! 2. **Pure Functions** - Cascades are functions over `(tree, node)`
//! 3. **Ports & Adapters** - Observability goes through trait-defined ports

pub mod builder;
pub mod canonical;
pub mod ports;
pub mod reconcile;
pub mod selection;
pub mod tree;

pub use builder::{build_tree, HierarchyBuilder};
pub use canonical::{sync, CanonicalOption, CanonicalValue};
pub use reconcile::{current_selections, IdentityKey, ReconcileOutcome, SelectedEntry, SelectedList};
pub use selection::{CascadeOutcome, SelectionState};
pub use tree::{Node, NodeId, NodeKind, Tree};
