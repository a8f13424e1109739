//! Text rendering of an [`AnalysisResult`].

use crate::config::CaseKind;
use crate::error::Result;
use crate::runner::{AnalysisResult, Phase};
use crate::sort::Metrics;
use std::io::{self, Write};

const BANNER: &str = "========================================";
const RULE: &str = "-----------------------------------------------------------------------";

/// Renders the per-case tables, the tab-separated table and the summary.
///
/// # Example
/// ```
/// use bubble_sort_analysis::{AnalysisConfig, AnalysisRunner, Report};
///
/// let config = AnalysisConfig::standard().with_sizes([10]).with_seed(1);
/// let result = AnalysisRunner::new(config).unwrap().run();
///
/// let mut out = Vec::new();
/// Report::new(&result).write_to(&mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("===== Worst Case: Reverse-sorted list ====="));
/// ```
pub struct Report<'a> {
    result: &'a AnalysisResult,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self { result }
    }

    /// Write the full report.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        self.write_title(out)?;
        for &case in &self.result.cases {
            self.write_case_table(out, case)?;
        }
        if self.result.has_summary_table() {
            self.write_summary_table(out)?;
        }
        self.write_analysis_summary(out)?;
        out.flush()?;
        Ok(())
    }

    pub fn write_title<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "BUBBLE SORT PERFORMANCE ANALYSIS")?;
        writeln!(out, "{}", BANNER)?;
        writeln!(out)
    }

    /// Fixed-width table for one case, one row per size.
    pub fn write_case_table<W: Write + ?Sized>(
        &self,
        out: &mut W,
        case: CaseKind,
    ) -> io::Result<()> {
        writeln!(out, "===== {}: {} =====", case.label(), case.description())?;
        writeln!(out)?;
        writeln!(
            out,
            "{:<10} {:<20} {:<20} {:<15}",
            "n", "Execution Time (ms)", "# of Comparisons", "# of Swaps"
        )?;
        writeln!(out, "{}", RULE)?;

        for row in self.result.case_rows(case) {
            writeln!(
                out,
                "{:<10} {:<20.4} {:<20} {:<15}",
                row.n,
                row.metrics.elapsed_ms(),
                row.metrics.comparisons(),
                row.metrics.swaps()
            )?;
        }
        writeln!(out)
    }

    /// Tab-separated table with one row per size and three columns per case.
    pub fn write_summary_table<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "COPY TO EXCEL/GOOGLE SHEETS")?;
        writeln!(out, "{}", BANNER)?;
        writeln!(out)?;

        let mut header = String::from("n");
        for case in &self.result.cases {
            let prefix = case.column_prefix();
            header.push_str(&format!("\t{p}_Time\t{p}_Comp\t{p}_Swap", p = prefix));
        }
        writeln!(out, "{}", header)?;

        for &n in &self.result.sizes {
            let mut line = n.to_string();
            for &case in &self.result.cases {
                line.push('\t');
                line.push_str(&tsv_cells(self.result.get(Phase::SummaryTable, case, n)));
            }
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Fixed description of the expected growth per case.
    pub fn write_analysis_summary<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "ANALYSIS SUMMARY")?;
        writeln!(out, "{}", BANNER)?;

        for &case in &self.result.cases {
            writeln!(out, "{} ({}):", case.label(), case.complexity())?;
            for note in case_notes(case) {
                writeln!(out, "  - {}", note)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

fn tsv_cells(metrics: Option<&Metrics>) -> String {
    match metrics {
        Some(m) => format!(
            "{:.4}\t{}\t{}",
            m.elapsed_ms(),
            m.comparisons(),
            m.swaps()
        ),
        None => "-\t-\t-".to_string(),
    }
}

fn case_notes(case: CaseKind) -> [&'static str; 2] {
    match case {
        CaseKind::Best => [
            "Already sorted, minimal comparisons, no swaps",
            "Optimized bubble sort detects sorted array early",
        ],
        CaseKind::Average => [
            "Random order, moderate comparisons and swaps",
            "Performance between best and worst cases",
        ],
        CaseKind::Worst => [
            "Reverse sorted, maximum comparisons and swaps",
            "Every element must be swapped multiple times",
        ],
    }
}
