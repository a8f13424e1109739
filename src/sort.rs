//! Bubble sort with comparison, swap and timing instrumentation.

use crate::tracer::{NoopTracer, Tracer};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Measurements from a single sort run.
///
/// Built once when the sort finishes and read through accessors afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    elapsed: Duration,
    comparisons: u64,
    swaps: u64,
    passes: usize,
}

impl Metrics {
    pub fn new(elapsed: Duration, comparisons: u64, swaps: u64, passes: usize) -> Self {
        Self {
            elapsed,
            comparisons,
            swaps,
            passes,
        }
    }

    /// Wall-clock time of the whole sort.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in fractional milliseconds, for display.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }

    /// Adjacent-element comparisons across all passes.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Adjacent-element exchanges across all passes.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Passes executed, including the final swap-free pass on early exit.
    pub fn passes(&self) -> usize {
        self.passes
    }
}

/// Sorts `seq` ascending in place and reports what it took.
///
/// Stops as soon as a pass makes no swaps, so sorted input costs exactly
/// `n - 1` comparisons and reversed input costs `n * (n - 1) / 2` of each.
///
/// ```
/// use bubble_sort_analysis::bubble_sort_with_metrics;
///
/// let mut values = vec![4, 3, 2, 1];
/// let metrics = bubble_sort_with_metrics(&mut values);
///
/// assert_eq!(values, [1, 2, 3, 4]);
/// assert_eq!(metrics.comparisons(), 6);
/// assert_eq!(metrics.swaps(), 6);
/// ```
pub fn bubble_sort_with_metrics<T: PartialOrd>(seq: &mut [T]) -> Metrics {
    bubble_sort_traced(seq, &NoopTracer)
}

/// Same as [`bubble_sort_with_metrics`], reporting passes to `tracer`.
pub fn bubble_sort_traced<T, Tr>(seq: &mut [T], tracer: &Tr) -> Metrics
where
    T: PartialOrd,
    Tr: Tracer + ?Sized,
{
    let n = seq.len();
    let mut comparisons = 0u64;
    let mut swaps = 0u64;
    let mut passes = 0usize;

    let start = Instant::now();

    for i in 0..n.saturating_sub(1) {
        let mut pass_swaps = 0u64;
        for j in 0..n - i - 1 {
            comparisons += 1;
            if seq[j] > seq[j + 1] {
                seq.swap(j, j + 1);
                pass_swaps += 1;
            }
        }
        swaps += pass_swaps;
        passes += 1;
        tracer.on_pass_end(i, pass_swaps);

        // Suffix is already in place.
        if pass_swaps == 0 {
            tracer.on_early_exit(i);
            break;
        }
    }

    let metrics = Metrics::new(start.elapsed(), comparisons, swaps, passes);
    tracer.on_sort_end(&metrics);
    metrics
}
