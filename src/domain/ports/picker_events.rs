//! Picker Event Port
//!
//! Provides an observable interface for picker triggers.
//! Enables JSON event streams, test recording, and debugging.

use crate::domain::tree::NodeId;

/// Event emitted while a trigger runs through the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// Tree built and preselection applied
    Built {
        sections: usize,
        leaves: usize,
        preselected: usize,
    },

    /// A single leaf flipped (detailed)
    LeafChanged {
        node: NodeId,
        label: String,
        checked: bool,
    },

    /// A section toggle cascaded to its leaves
    SectionCascaded {
        node: NodeId,
        title: String,
        checked: bool,
        affected: usize,
    },

    /// Selected list reconciled against the tree
    Reconciled {
        added: Vec<String>,
        removed: Vec<String>,
        selected: usize,
    },

    /// Selected list reordered from outside
    Reordered { order: Vec<String> },

    /// Canonical value rebuilt
    CanonicalSynced { values: Vec<String> },

    /// Section collapsed or expanded (presentation only)
    CollapseToggled { node: NodeId, collapsed: bool },

    /// Trigger rejected before any state changed
    TriggerRejected { trigger: String, reason: String },
}

/// Trait for receiving picker events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait PickerEventSink: Send + Sync {
    /// Handle a picker event
    fn on_event(&self, event: PickerEvent);

    /// Check if this sink wants per-leaf events
    ///
    /// Summary-only sinks skip `LeafChanged`.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PickerEventSink for NoopEventSink {
    fn on_event(&self, _event: PickerEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
