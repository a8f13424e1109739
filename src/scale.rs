//! Geometric input-size series.

/// Geometric scale of input sizes: `start * base^k` for `k` in `0..=steps`.
///
/// # Example
/// ```
/// use bubble_sort_analysis::SizeScale;
///
/// let scale = SizeScale::new(250, 2, 3);
/// let values: Vec<_> = scale.values().collect();
/// assert_eq!(values, vec![250, 500, 1000, 2000]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeScale {
    pub start: usize,
    pub base: usize,
    pub steps: u32,
}

impl SizeScale {
    pub const fn new(start: usize, base: usize, steps: u32) -> Self {
        Self { start, base, steps }
    }

    /// Doubling from 250: 250, 500, 1000, 2000, 4000
    pub const DOUBLING: Self = Self::new(250, 2, 4);

    /// Returns an iterator over the sizes.
    pub fn values(&self) -> impl Iterator<Item = usize> {
        let start = self.start;
        let base = self.base;
        (0..=self.steps).map(move |exp| start.saturating_mul(base.saturating_pow(exp)))
    }
}
