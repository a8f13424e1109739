//! Error types for analysis runs.

use crate::config::CaseKind;

/// Errors produced while configuring a run or writing its output.
///
/// Sorting and input generation never fail; everything here comes from the
/// configuration layer or from I/O at the edges.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The configuration lists no input sizes.
    #[error("no input sizes configured")]
    EmptySizes,

    /// The configuration lists no cases.
    #[error("no cases configured")]
    EmptyCases,

    /// The same size appears twice.
    #[error("input size {n} is listed more than once")]
    DuplicateSize { n: usize },

    /// The same case appears twice.
    #[error("case `{}` is listed more than once", case.name())]
    DuplicateCase { case: CaseKind },

    /// A case name did not match any known case.
    #[error("unknown case `{name}` (expected one of: best, average, worst)")]
    UnknownCase {
        /// The name that failed to parse.
        name: String,
    },

    /// A preset name did not match any known preset.
    #[error("unknown preset `{name}`")]
    UnknownPreset {
        /// The name that failed to resolve.
        name: String,
    },

    /// Writing the report or the run record failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the run record failed.
    #[error("failed to serialize run record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;
