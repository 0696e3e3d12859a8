//! JSON Event Sink
//!
//! Outputs picker events as NDJSON, one object per line.

use crate::domain::ports::{PickerEvent, PickerEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl PickerEventSink for JsonEventSink {
    fn on_event(&self, event: PickerEvent) {
        let json = match event {
            PickerEvent::Built {
                sections,
                leaves,
                preselected,
            } => {
                serde_json::json!({
                    "event": "built",
                    "sections": sections,
                    "leaves": leaves,
                    "preselected": preselected,
                })
            }

            PickerEvent::LeafChanged {
                node,
                label,
                checked,
            } => {
                serde_json::json!({
                    "event": "leaf_changed",
                    "node": node,
                    "label": label,
                    "checked": checked,
                })
            }

            PickerEvent::SectionCascaded {
                node,
                title,
                checked,
                affected,
            } => {
                serde_json::json!({
                    "event": "section_cascaded",
                    "node": node,
                    "title": title,
                    "checked": checked,
                    "affected": affected,
                })
            }

            PickerEvent::Reconciled {
                added,
                removed,
                selected,
            } => {
                serde_json::json!({
                    "event": "reconciled",
                    "added": added,
                    "removed": removed,
                    "selected": selected,
                })
            }

            PickerEvent::Reordered { order } => {
                serde_json::json!({
                    "event": "reordered",
                    "order": order,
                })
            }

            PickerEvent::CanonicalSynced { values } => {
                serde_json::json!({
                    "event": "canonical_synced",
                    "values": values,
                })
            }

            PickerEvent::CollapseToggled { node, collapsed } => {
                serde_json::json!({
                    "event": "collapse_toggled",
                    "node": node,
                    "collapsed": collapsed,
                })
            }

            PickerEvent::TriggerRejected { trigger, reason } => {
                serde_json::json!({
                    "event": "trigger_rejected",
                    "trigger": trigger,
                    "reason": reason,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
