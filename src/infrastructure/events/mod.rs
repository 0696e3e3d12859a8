//! Event Sink Implementations
//!
//! Provides concrete implementations of PickerEventSink:
//! - JsonEventSink: NDJSON output for scripting and CI

mod json;

pub use json::JsonEventSink;
