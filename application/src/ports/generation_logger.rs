//! Batch transcript port.
//!
//! HTTP callers only ever see a flat phrase list. The transcript keeps the
//! rest: one record per unit once its fate is known, then one summary
//! record for the batch. Operational diagnostics stay on `tracing`.

use serde_json::{Map, Value};

/// One transcript record: a kind tag plus flat fields
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationEvent {
    /// `unit_succeeded`, `unit_failed`, `unit_timed_out`, `unit_cancelled` or `batch_complete`
    pub kind: &'static str,
    pub fields: Map<String, Value>,
}

impl GenerationEvent {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            fields: Map::new(),
        }
    }

    /// Attach a field, replacing any previous value under `key`
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }
}

/// Sink for transcript records.
///
/// A sink that cannot persist a record drops it; the batch never waits on
/// or fails because of the transcript.
pub trait GenerationLogger: Send + Sync {
    fn log(&self, event: GenerationEvent);
}

/// Transcript disabled
pub struct NoGenerationLogger;

impl GenerationLogger for NoGenerationLogger {
    fn log(&self, _event: GenerationEvent) {}
}
