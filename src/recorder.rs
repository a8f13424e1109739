//! Event recording and run record export.

use crate::config::{CaseKind, SerializableConfig};
use crate::error::Result;
use crate::runner::{AnalysisResult, Phase};
use crate::sort::Metrics;
use crate::tracer::{SortEvent, Tracer};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

/// Tracer that keeps every event with a timestamp.
pub struct EventRecorder {
    events: Mutex<Vec<TimestampedEvent>>,
    start_time: Instant,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            start_time: Instant::now(),
        }
    }

    /// Snapshot of the events so far, oldest first.
    pub fn events(&self) -> Vec<TimestampedEvent> {
        self.events.lock().clone()
    }

    fn push(&self, event: SortEvent) {
        let timestamp_us = self.start_time.elapsed().as_micros() as u64;
        self.events.lock().push(TimestampedEvent {
            timestamp_us,
            event,
        });
    }
}

impl Default for EventRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracer for EventRecorder {
    fn on_case_start(&self, case: CaseKind, n: usize) {
        self.push(SortEvent::CaseStarted { case, n });
    }

    fn on_pass_end(&self, pass: usize, swaps: u64) {
        self.push(SortEvent::PassFinished { pass, swaps });
    }

    fn on_early_exit(&self, pass: usize) {
        self.push(SortEvent::EarlyExit { pass });
    }

    fn on_sort_end(&self, metrics: &Metrics) {
        self.push(SortEvent::SortFinished {
            comparisons: metrics.comparisons(),
            swaps: metrics.swaps(),
            passes: metrics.passes(),
            elapsed_ns: metrics.elapsed().as_nanos() as u64,
        });
    }
}

/// Event with timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampedEvent {
    /// Microseconds since the recorder was created.
    pub timestamp_us: u64,
    /// The actual event.
    pub event: SortEvent,
}

/// One sort run as stored in a [`RunRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMeasurement {
    pub phase: Phase,
    pub case: CaseKind,
    pub n: usize,
    pub elapsed_ns: u64,
    pub comparisons: u64,
    pub swaps: u64,
    pub passes: usize,
}

/// Complete run record for export.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunRecord {
    /// Configuration used.
    pub config: SerializableConfig,
    /// Seed used (for reproducibility).
    pub seed: u64,
    /// Every measurement, in execution order.
    pub measurements: Vec<RecordedMeasurement>,
    /// Recorded tracer events (empty unless recording was enabled).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<TimestampedEvent>,
    /// Metadata.
    pub metadata: RunMetadata,
}

impl RunRecord {
    pub fn from_result(
        config: SerializableConfig,
        result: &AnalysisResult,
        events: Vec<TimestampedEvent>,
    ) -> Self {
        let measurements = result
            .measurements
            .iter()
            .map(|m| RecordedMeasurement {
                phase: m.phase,
                case: m.case,
                n: m.n,
                elapsed_ns: m.metrics.elapsed().as_nanos() as u64,
                comparisons: m.metrics.comparisons(),
                swaps: m.metrics.swaps(),
                passes: m.metrics.passes(),
            })
            .collect();

        Self {
            config,
            seed: result.seed,
            measurements,
            events,
            metadata: RunMetadata::new(result.total_duration.as_millis() as u64),
        }
    }

    /// Export to a JSON file.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Metadata for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    pub timestamp: String,
    pub duration_ms: u64,
    pub platform: String,
}

impl RunMetadata {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            timestamp: unix_timestamp(),
            duration_ms,
            platform: std::env::consts::OS.to_string(),
        }
    }
}

/// Seconds since the Unix epoch, as a string.
fn unix_timestamp() -> String {
    use std::time::SystemTime;
    let duration = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}", duration.as_secs())
}
