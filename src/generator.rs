//! Input sequence generators for each case.

use crate::config::CaseKind;
use rand::Rng;

/// `[1, 2, ..., n]`.
pub fn generate_best_case(n: usize) -> Vec<i64> {
    (1..=n as i64).collect()
}

/// `n` values drawn uniformly from `[0, n)`.
pub fn generate_average_case<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<i64> {
    let upper = n as i64;
    (0..n).map(|_| rng.gen_range(0..upper)).collect()
}

/// `[n, n-1, ..., 1]`.
pub fn generate_worst_case(n: usize) -> Vec<i64> {
    (1..=n as i64).rev().collect()
}

impl CaseKind {
    /// Generate an input of length `n` for this case.
    ///
    /// Only [`CaseKind::Average`] draws from `rng`, so best and worst inputs
    /// never disturb the random stream.
    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<i64> {
        match self {
            CaseKind::Best => generate_best_case(n),
            CaseKind::Average => generate_average_case(n, rng),
            CaseKind::Worst => generate_worst_case(n),
        }
    }
}
