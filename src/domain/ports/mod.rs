//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod picker_events;

pub use picker_events::{NoopEventSink, PickerEvent, PickerEventSink};
