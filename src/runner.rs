//! Measurement driver.

use crate::config::{AnalysisConfig, CaseKind};
use crate::error::Result;
use crate::recorder::{EventRecorder, RunRecord};
use crate::sort::{bubble_sort_traced, Metrics};
use crate::tracer::Tracer;
use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Which table a measurement was taken for.
///
/// The tab-separated table re-measures every configuration instead of
/// reusing the per-case results, so a run holds two independent samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    CaseTables,
    SummaryTable,
}

/// One sort of one generated input.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseResult {
    pub phase: Phase,
    pub case: CaseKind,
    pub n: usize,
    pub metrics: Metrics,
}

/// Everything measured in a run.
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    /// Sizes in report order.
    pub sizes: Vec<usize>,
    /// Cases in report order.
    pub cases: Vec<CaseKind>,
    /// Seed the average-case inputs were drawn with.
    pub seed: u64,
    /// Measurements in execution order.
    pub measurements: Vec<CaseResult>,
    pub total_duration: Duration,
}

impl AnalysisResult {
    /// Look up the measurement for `(phase, case, n)`.
    pub fn get(&self, phase: Phase, case: CaseKind, n: usize) -> Option<&Metrics> {
        self.measurements
            .iter()
            .find(|m| m.phase == phase && m.case == case && m.n == n)
            .map(|m| &m.metrics)
    }

    /// Per-case table rows for `case`, in size order.
    pub fn case_rows(&self, case: CaseKind) -> impl Iterator<Item = &CaseResult> {
        self.measurements
            .iter()
            .filter(move |m| m.phase == Phase::CaseTables && m.case == case)
    }

    /// Whether the tab-separated pass ran.
    pub fn has_summary_table(&self) -> bool {
        self.measurements
            .iter()
            .any(|m| m.phase == Phase::SummaryTable)
    }
}

/// Runs every configured `(case, size)` pair through the sort.
pub struct AnalysisRunner {
    config: AnalysisConfig,
    seed: u64,
    rng: SmallRng,
    tracers: Vec<Arc<dyn Tracer>>,
    /// Event recorder.
    recorder: Option<Arc<EventRecorder>>,
}

impl AnalysisRunner {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let rng = SmallRng::seed_from_u64(seed);

        let mut tracers: Vec<Arc<dyn Tracer>> = Vec::new();
        let recorder = if config.record_events {
            let recorder = Arc::new(EventRecorder::new());
            tracers.push(recorder.clone());
            Some(recorder)
        } else {
            None
        };

        Ok(Self {
            config,
            seed,
            rng,
            tracers,
            recorder,
        })
    }

    /// Add a tracer that receives every event alongside the recorder.
    pub fn with_tracer(mut self, tracer: Arc<dyn Tracer>) -> Self {
        self.tracers.push(tracer);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Seed actually in use (drawn at construction if none was configured).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn recorder(&self) -> Option<&Arc<EventRecorder>> {
        self.recorder.as_ref()
    }

    /// Run the per-case pass and, if enabled, the tab-separated pass.
    pub fn run(&mut self) -> AnalysisResult {
        let start = Instant::now();
        let sizes = self.config.sizes.clone();
        let cases = self.config.cases.clone();
        let mut measurements = Vec::new();

        for &case in &cases {
            for &n in &sizes {
                let metrics = self.measure(case, n);
                measurements.push(CaseResult {
                    phase: Phase::CaseTables,
                    case,
                    n,
                    metrics,
                });
            }
        }

        // Fresh inputs for every row; nothing is reused from the pass above.
        if self.config.summary_table {
            for &n in &sizes {
                for &case in &cases {
                    let metrics = self.measure(case, n);
                    measurements.push(CaseResult {
                        phase: Phase::SummaryTable,
                        case,
                        n,
                        metrics,
                    });
                }
            }
        }

        AnalysisResult {
            sizes,
            cases,
            seed: self.seed,
            measurements,
            total_duration: start.elapsed(),
        }
    }

    /// Generate one input for `case` and sort it.
    pub fn measure(&mut self, case: CaseKind, n: usize) -> Metrics {
        self.tracers.on_case_start(case, n);
        let mut seq = case.generate(n, &mut self.rng);
        bubble_sort_traced(&mut seq, &self.tracers)
    }

    /// Build the exportable record for `result`.
    pub fn export_run_record(&self, result: &AnalysisResult) -> RunRecord {
        let events = self
            .recorder
            .as_ref()
            .map(|r| r.events())
            .unwrap_or_default();
        RunRecord::from_result(self.config.to_serializable(), result, events)
    }

    /// Write the record to the configured output path, if one is set.
    pub fn export_if_configured(&self, result: &AnalysisResult) -> Result<Option<RunRecord>> {
        match &self.config.event_output_path {
            Some(path) => {
                let record = self.export_run_record(result);
                record.export_to_file(path)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::tracer::SortEvent;

    #[test]
    fn test_basic_run() {
        let config = AnalysisConfig::standard().with_sizes([5, 10]).with_seed(42);

        let mut runner = AnalysisRunner::new(config).unwrap();
        let result = runner.run();

        // 3 cases x 2 sizes, twice.
        assert_eq!(result.measurements.len(), 12);
        assert!(result.has_summary_table());

        let best = result.get(Phase::CaseTables, CaseKind::Best, 10).unwrap();
        assert_eq!(best.comparisons(), 9);
        assert_eq!(best.swaps(), 0);

        let worst = result.get(Phase::SummaryTable, CaseKind::Worst, 5).unwrap();
        assert_eq!(worst.comparisons(), 10);
        assert_eq!(worst.swaps(), 10);
    }

    #[test]
    fn test_determinism() {
        let config = AnalysisConfig::standard()
            .with_sizes([50, 100])
            .with_seed(12345);

        let result1 = AnalysisRunner::new(config.clone()).unwrap().run();
        let result2 = AnalysisRunner::new(config).unwrap().run();

        let counts = |r: &AnalysisResult| {
            r.measurements
                .iter()
                .map(|m| (m.phase, m.case, m.n, m.metrics.comparisons(), m.metrics.swaps()))
                .collect::<Vec<_>>()
        };
        assert_eq!(counts(&result1), counts(&result2));
        assert_eq!(result1.seed, 12345);
    }

    #[test]
    fn test_without_summary_table() {
        let config = AnalysisConfig::standard()
            .with_sizes([8])
            .with_summary_table(false)
            .with_seed(1);

        let result = AnalysisRunner::new(config).unwrap().run();

        assert_eq!(result.measurements.len(), 3);
        assert!(!result.has_summary_table());
        assert_eq!(result.case_rows(CaseKind::Average).count(), 1);
    }

    #[test]
    fn test_invalid_config() {
        let config = AnalysisConfig::standard().with_sizes([]);
        assert!(matches!(
            AnalysisRunner::new(config),
            Err(AnalysisError::EmptySizes)
        ));
    }

    #[test]
    fn test_zero_size() {
        let config = AnalysisConfig::standard().with_sizes([0]).with_seed(9);
        let result = AnalysisRunner::new(config).unwrap().run();
        for m in &result.measurements {
            assert_eq!(m.metrics.comparisons(), 0);
            assert_eq!(m.metrics.swaps(), 0);
        }
    }

    #[test]
    fn test_with_recording() {
        let config = AnalysisConfig::standard()
            .with_sizes([4])
            .with_cases([CaseKind::Worst])
            .with_summary_table(false)
            .with_recording(true);

        let mut runner = AnalysisRunner::new(config).unwrap();
        let result = runner.run();

        let recorder = runner.recorder().expect("Recorder should be present");
        let events: Vec<_> = recorder.events().into_iter().map(|e| e.event).collect();
        assert_eq!(
            events[0],
            SortEvent::CaseStarted {
                case: CaseKind::Worst,
                n: 4
            }
        );
        assert!(matches!(
            events.last(),
            Some(SortEvent::SortFinished {
                comparisons: 6,
                swaps: 6,
                ..
            })
        ));

        let record = runner.export_run_record(&result);
        assert_eq!(record.measurements.len(), 1);
        assert_eq!(record.events.len(), events.len());
    }

    #[test]
    fn test_extra_tracer() {
        let recorder = Arc::new(EventRecorder::new());
        let config = AnalysisConfig::standard()
            .with_sizes([3])
            .with_cases([CaseKind::Best])
            .with_summary_table(false);

        let mut runner = AnalysisRunner::new(config)
            .unwrap()
            .with_tracer(recorder.clone());
        runner.run();

        assert!(runner.recorder().is_none());
        assert!(!recorder.events().is_empty());
    }
}
