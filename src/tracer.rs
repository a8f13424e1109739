//! Tracer trait for observing sort runs.
//!
//! This module defines the [`Tracer`] trait used to observe the driver and
//! the sort loop. The default [`NoopTracer`] is zero-cost when nothing is
//! listening; [`StderrTracer`] prints one line per event and
//! [`EventRecorder`](crate::EventRecorder) keeps them for export.
//!
//! # Example
//!
//! ```
//! use bubble_sort_analysis::{bubble_sort_traced, Tracer};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! #[derive(Default)]
//! struct PassCounter(AtomicUsize);
//!
//! impl Tracer for PassCounter {
//!     fn on_pass_end(&self, _pass: usize, _swaps: u64) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//!
//! let counter = PassCounter::default();
//! let mut values = vec![3, 1, 2];
//! bubble_sort_traced(&mut values, &counter);
//! assert_eq!(counter.0.load(Ordering::Relaxed), 2);
//! ```

use crate::config::CaseKind;
use crate::sort::Metrics;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Tracer trait for observing analysis runs.
///
/// All methods have default empty implementations, so implementors only
/// override the events they care about.
///
/// Pass-level callbacks fire inside the timed region of a sort, so a slow
/// tracer inflates the reported elapsed time. Counts are unaffected.
pub trait Tracer: Send + Sync + 'static {
    /// Called before the driver generates the input for `(case, n)`.
    #[inline]
    fn on_case_start(&self, _case: CaseKind, _n: usize) {}

    /// Called after each completed pass with the swaps made in that pass.
    #[inline]
    fn on_pass_end(&self, _pass: usize, _swaps: u64) {}

    /// Called when a pass made no swaps and the sort stops early.
    #[inline]
    fn on_early_exit(&self, _pass: usize) {}

    /// Called once per sort with its final metrics.
    #[inline]
    fn on_sort_end(&self, _metrics: &Metrics) {}
}

/// Tracer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {}

/// Tracer that logs events to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrTracer {
    /// Also log every pass, not just case boundaries.
    pub passes: bool,
}

impl StderrTracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_passes(mut self, enabled: bool) -> Self {
        self.passes = enabled;
        self
    }
}

impl Tracer for StderrTracer {
    fn on_case_start(&self, case: CaseKind, n: usize) {
        eprintln!("[trace] {} n={}", case.name(), n);
    }

    fn on_pass_end(&self, pass: usize, swaps: u64) {
        if self.passes {
            eprintln!("[trace]   pass {} swaps={}", pass, swaps);
        }
    }

    fn on_early_exit(&self, pass: usize) {
        eprintln!("[trace]   early exit after pass {}", pass);
    }

    fn on_sort_end(&self, metrics: &Metrics) {
        eprintln!(
            "[trace]   done: comparisons={} swaps={} passes={} time={:?}",
            metrics.comparisons(),
            metrics.swaps(),
            metrics.passes(),
            metrics.elapsed()
        );
    }
}

impl<T: Tracer + ?Sized> Tracer for Arc<T> {
    #[inline]
    fn on_case_start(&self, case: CaseKind, n: usize) {
        (**self).on_case_start(case, n)
    }

    #[inline]
    fn on_pass_end(&self, pass: usize, swaps: u64) {
        (**self).on_pass_end(pass, swaps)
    }

    #[inline]
    fn on_early_exit(&self, pass: usize) {
        (**self).on_early_exit(pass)
    }

    #[inline]
    fn on_sort_end(&self, metrics: &Metrics) {
        (**self).on_sort_end(metrics)
    }
}

/// Fan-out: every event goes to each tracer in order.
impl Tracer for Vec<Arc<dyn Tracer>> {
    fn on_case_start(&self, case: CaseKind, n: usize) {
        for tracer in self {
            tracer.on_case_start(case, n);
        }
    }

    fn on_pass_end(&self, pass: usize, swaps: u64) {
        for tracer in self {
            tracer.on_pass_end(pass, swaps);
        }
    }

    fn on_early_exit(&self, pass: usize) {
        for tracer in self {
            tracer.on_early_exit(pass);
        }
    }

    fn on_sort_end(&self, metrics: &Metrics) {
        for tracer in self {
            tracer.on_sort_end(metrics);
        }
    }
}

/// Serializable form of a tracer callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SortEvent {
    CaseStarted { case: CaseKind, n: usize },
    PassFinished { pass: usize, swaps: u64 },
    EarlyExit { pass: usize },
    SortFinished {
        comparisons: u64,
        swaps: u64,
        passes: usize,
        elapsed_ns: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Collecting(Mutex<Vec<String>>);

    impl Tracer for Collecting {
        fn on_case_start(&self, case: CaseKind, n: usize) {
            self.0.lock().push(format!("{}:{}", case.name(), n));
        }
    }

    #[test]
    fn test_fanout_reaches_every_tracer() {
        let a = Arc::new(Collecting::default());
        let b = Arc::new(Collecting::default());
        let fanout: Vec<Arc<dyn Tracer>> = vec![a.clone(), Arc::new(NoopTracer), b.clone()];

        fanout.on_case_start(CaseKind::Worst, 8);

        assert_eq!(*a.0.lock(), vec!["worst:8".to_string()]);
        assert_eq!(*b.0.lock(), vec!["worst:8".to_string()]);
    }

    #[test]
    fn test_event_serialization_tag() {
        let event = SortEvent::EarlyExit { pass: 0 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"early_exit","pass":0}"#);
    }
}
