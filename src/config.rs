//! Configuration types for analysis runs.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::path::PathBuf;
use std::str::FromStr;

/// Complete configuration for an analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    // === Workload ===
    /// Input sizes, measured in the order given. Each size at most once.
    pub sizes: Vec<usize>,

    /// Cases to measure, in report order. Each case at most once.
    pub cases: Vec<CaseKind>,

    // === RNG ===
    /// Seed for the average-case random source (None = random).
    pub seed: Option<u64>,

    // === Output ===
    /// Emit the tab-separated table (with its own measurement pass).
    pub summary_table: bool,

    /// Keep pass-level events in the exported record.
    pub record_events: bool,

    /// Where to write the JSON run record, if anywhere.
    pub event_output_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl AnalysisConfig {
    /// Sizes 500, 1000 and 2000 over all three cases.
    pub fn standard() -> Self {
        Self {
            sizes: vec![500, 1000, 2000],
            cases: CaseKind::ALL.to_vec(),
            seed: None,
            summary_table: true,
            record_events: false,
            event_output_path: None,
        }
    }

    // === Builder methods ===

    /// Repeated sizes are dropped, keeping first-seen order.
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = usize>) -> Self {
        self.sizes = dedup_in_order(sizes);
        self
    }

    /// Repeated cases are dropped, keeping first-seen order.
    pub fn with_cases(mut self, cases: impl IntoIterator<Item = CaseKind>) -> Self {
        self.cases = dedup_in_order(cases);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_random_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    pub fn with_summary_table(mut self, enabled: bool) -> Self {
        self.summary_table = enabled;
        self
    }

    pub fn with_recording(mut self, enabled: bool) -> Self {
        self.record_events = enabled;
        self
    }

    pub fn with_event_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.event_output_path = Some(path.into());
        self
    }

    /// Reject configurations that would produce an empty or ambiguous report.
    ///
    /// Rows are keyed by `(case, size)`, so a repeated size or case (possible
    /// when the fields are set directly) is an error.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.sizes.is_empty() {
            return Err(AnalysisError::EmptySizes);
        }
        if self.cases.is_empty() {
            return Err(AnalysisError::EmptyCases);
        }
        if let Some(&n) = first_repeat(&self.sizes) {
            return Err(AnalysisError::DuplicateSize { n });
        }
        if let Some(&case) = first_repeat(&self.cases) {
            return Err(AnalysisError::DuplicateCase { case });
        }
        Ok(())
    }

    /// Convert to a serializable form for recording.
    pub fn to_serializable(&self) -> SerializableConfig {
        SerializableConfig {
            sizes: self.sizes.clone(),
            cases: self.cases.iter().map(|c| c.name().to_string()).collect(),
            summary_table: self.summary_table,
            record_events: self.record_events,
        }
    }
}

fn dedup_in_order<T: Copy + Eq + Hash>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(*item)).collect()
}

fn first_repeat<T: Eq + Hash>(items: &[T]) -> Option<&T> {
    let mut seen = HashSet::new();
    items.iter().find(|item| !seen.insert(*item))
}

/// Input distribution being measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseKind {
    /// Already sorted: `[1, 2, ..., n]`.
    Best,
    /// Uniform random values in `[0, n)`.
    Average,
    /// Reverse sorted: `[n, n-1, ..., 1]`.
    Worst,
}

impl CaseKind {
    /// All cases in report order.
    pub const ALL: [CaseKind; 3] = [CaseKind::Best, CaseKind::Average, CaseKind::Worst];

    /// Short machine name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            CaseKind::Best => "best",
            CaseKind::Average => "average",
            CaseKind::Worst => "worst",
        }
    }

    /// Human-readable label used in table headings.
    pub fn label(&self) -> &'static str {
        match self {
            CaseKind::Best => "Best Case",
            CaseKind::Average => "Average Case",
            CaseKind::Worst => "Worst Case",
        }
    }

    /// What the generated input looks like.
    pub fn description(&self) -> &'static str {
        match self {
            CaseKind::Best => "Already sorted list",
            CaseKind::Average => "Random list",
            CaseKind::Worst => "Reverse-sorted list",
        }
    }

    /// Prefix for the tab-separated column names (`Best_Time`, ...).
    pub fn column_prefix(&self) -> &'static str {
        match self {
            CaseKind::Best => "Best",
            CaseKind::Average => "Avg",
            CaseKind::Worst => "Worst",
        }
    }

    /// Expected growth of the comparison count.
    pub fn complexity(&self) -> &'static str {
        match self {
            CaseKind::Best => "O(n)",
            CaseKind::Average | CaseKind::Worst => "O(n²)",
        }
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CaseKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best" => Ok(CaseKind::Best),
            "average" | "avg" => Ok(CaseKind::Average),
            "worst" => Ok(CaseKind::Worst),
            _ => Err(AnalysisError::UnknownCase {
                name: s.to_string(),
            }),
        }
    }
}

/// Serializable configuration for recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableConfig {
    pub sizes: Vec<usize>,
    pub cases: Vec<String>,
    pub summary_table: bool,
    pub record_events: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.sizes, vec![500, 1000, 2000]);
        assert_eq!(config.cases, CaseKind::ALL.to_vec());
        assert!(config.summary_table);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        let config = AnalysisConfig::standard().with_sizes([]);
        assert!(matches!(config.validate(), Err(AnalysisError::EmptySizes)));

        let config = AnalysisConfig::standard().with_cases([]);
        assert!(matches!(config.validate(), Err(AnalysisError::EmptyCases)));
    }

    #[test]
    fn test_builders_drop_repeats() {
        let config = AnalysisConfig::standard()
            .with_sizes([300, 100, 300, 100, 200])
            .with_cases([CaseKind::Worst, CaseKind::Best, CaseKind::Worst]);
        assert_eq!(config.sizes, vec![300, 100, 200]);
        assert_eq!(config.cases, vec![CaseKind::Worst, CaseKind::Best]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_repeats() {
        let mut config = AnalysisConfig::standard();
        config.sizes = vec![10, 20, 10];
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::DuplicateSize { n: 10 })
        ));

        let mut config = AnalysisConfig::standard();
        config.cases = vec![CaseKind::Average, CaseKind::Average];
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::DuplicateCase {
                case: CaseKind::Average
            })
        ));
    }

    #[test]
    fn test_case_parse() {
        assert_eq!("best".parse::<CaseKind>().unwrap(), CaseKind::Best);
        assert_eq!("AVG".parse::<CaseKind>().unwrap(), CaseKind::Average);
        assert_eq!(" worst ".parse::<CaseKind>().unwrap(), CaseKind::Worst);
        assert!(matches!(
            "median".parse::<CaseKind>(),
            Err(AnalysisError::UnknownCase { .. })
        ));
    }

    #[test]
    fn test_case_names_round_trip() {
        for case in CaseKind::ALL {
            assert_eq!(case.name().parse::<CaseKind>().unwrap(), case);
        }
    }

    #[test]
    fn test_serializable_config() {
        let config = AnalysisConfig::standard()
            .with_sizes([10, 20])
            .with_cases([CaseKind::Worst]);
        let serializable = config.to_serializable();
        assert_eq!(serializable.sizes, vec![10, 20]);
        assert_eq!(serializable.cases, vec!["worst".to_string()]);
    }
}
