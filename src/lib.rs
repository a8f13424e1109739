//! Bubble sort performance analysis.
//!
//! This crate provides tools for:
//! - Generating sorted, random and reverse-sorted inputs
//! - Sorting them with an early-exit bubble sort that counts comparisons and swaps
//! - Driving a run over several sizes and rendering the result tables
//! - Recording tracer events and exporting a run as JSON

mod config;
mod error;
mod generator;
mod presets;
mod recorder;
mod report;
mod runner;
mod scale;
mod sort;
mod tracer;

pub use config::{AnalysisConfig, CaseKind, SerializableConfig};
pub use error::{AnalysisError, Result};
pub use generator::{generate_average_case, generate_best_case, generate_worst_case};
pub use presets::Presets;
pub use recorder::{EventRecorder, RecordedMeasurement, RunMetadata, RunRecord, TimestampedEvent};
pub use report::Report;
pub use runner::{AnalysisResult, AnalysisRunner, CaseResult, Phase};
pub use scale::SizeScale;
pub use sort::{bubble_sort_traced, bubble_sort_with_metrics, Metrics};
pub use tracer::{NoopTracer, SortEvent, StderrTracer, Tracer};
