//! Predefined configurations.

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::scale::SizeScale;

/// Collection of preset configurations.
pub struct Presets;

impl Presets {
    /// Sizes 500, 1000, 2000 over all cases.
    pub fn standard() -> AnalysisConfig {
        AnalysisConfig::standard()
    }

    /// Small sizes, finishes instantly (CI-friendly).
    pub fn quick() -> AnalysisConfig {
        AnalysisConfig::standard().with_sizes([50, 100, 200])
    }

    /// Doubling sizes, to make the quadratic growth visible.
    pub fn doubling() -> AnalysisConfig {
        AnalysisConfig::standard().with_sizes(SizeScale::DOUBLING.values())
    }

    /// Larger inputs; the worst case at 10000 takes noticeably longer.
    pub fn large() -> AnalysisConfig {
        AnalysisConfig::standard().with_sizes(SizeScale::new(2500, 2, 2).values())
    }

    /// All presets as a list for iteration.
    pub fn all() -> Vec<(&'static str, AnalysisConfig)> {
        vec![
            ("standard", Self::standard()),
            ("quick", Self::quick()),
            ("doubling", Self::doubling()),
            ("large", Self::large()),
        ]
    }

    /// Look up a preset by name.
    pub fn by_name(name: &str) -> Result<AnalysisConfig, AnalysisError> {
        Self::all()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, config)| config)
            .ok_or_else(|| AnalysisError::UnknownPreset {
                name: name.to_string(),
            })
    }

    /// Names of every preset, in listing order.
    pub fn names() -> Vec<&'static str> {
        Self::all().into_iter().map(|(n, _)| n).collect()
    }
}
