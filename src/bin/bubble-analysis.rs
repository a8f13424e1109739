//! Command-line driver: prints the bubble sort analysis report.

use anyhow::Context;
use bubble_sort_analysis::{
    AnalysisConfig, AnalysisRunner, CaseKind, Presets, Report, StderrTracer,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "bubble-analysis")]
#[command(about = "Measure bubble sort on sorted, random and reverse-sorted inputs")]
struct Args {
    /// Random seed for the average-case inputs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Preset configuration (standard, quick, doubling, large)
    #[arg(long)]
    preset: Option<String>,

    /// Input sizes, comma separated (overrides the preset)
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<usize>,

    /// Restrict to these cases (best, average, worst); repeatable
    #[arg(long = "case")]
    cases: Vec<CaseKind>,

    /// Skip the tab-separated table and its measurement pass
    #[arg(long)]
    skip_summary_table: bool,

    /// Write a JSON run record to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Include tracer events in the JSON run record
    #[arg(long, requires = "json")]
    record_events: bool,

    /// Log each measurement to stderr
    #[arg(short, long)]
    verbose: bool,

    /// With --verbose, also log every pass
    #[arg(long, requires = "verbose")]
    trace_passes: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = build_config(&args)?;

    let mut runner = AnalysisRunner::new(config).context("invalid configuration")?;
    if args.verbose {
        eprintln!("Using seed: {}", runner.seed());
        runner = runner.with_tracer(Arc::new(
            StderrTracer::new().with_passes(args.trace_passes),
        ));
    }

    let result = runner.run();

    let stdout = std::io::stdout();
    Report::new(&result)
        .write_to(&mut stdout.lock())
        .context("failed to write report")?;

    if let Some(record) = runner
        .export_if_configured(&result)
        .context("failed to export run record")?
    {
        if let Some(path) = &runner.config().event_output_path {
            eprintln!(
                "Run record written to {} ({} measurements)",
                path.display(),
                record.measurements.len()
            );
        }
    }

    Ok(())
}

fn build_config(args: &Args) -> anyhow::Result<AnalysisConfig> {
    let mut config = match &args.preset {
        Some(name) => Presets::by_name(name).with_context(|| {
            format!("available presets: {}", Presets::names().join(", "))
        })?,
        None => AnalysisConfig::standard(),
    };

    if !args.sizes.is_empty() {
        config = config.with_sizes(args.sizes.iter().copied());
    }
    if !args.cases.is_empty() {
        config = config.with_cases(args.cases.iter().copied());
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(path) = &args.json {
        config = config.with_event_output_path(path);
    }

    Ok(config
        .with_summary_table(!args.skip_summary_table)
        .with_recording(args.record_events))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_standard() {
        let args = Args::parse_from(["bubble-analysis"]);
        assert_eq!(build_config(&args).unwrap(), AnalysisConfig::standard());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "bubble-analysis",
            "--preset",
            "quick",
            "--sizes",
            "3,4",
            "--case",
            "worst",
            "--seed",
            "7",
            "--skip-summary-table",
        ]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.sizes, vec![3, 4]);
        assert_eq!(config.cases, vec![CaseKind::Worst]);
        assert_eq!(config.seed, Some(7));
        assert!(!config.summary_table);
    }

    #[test]
    fn test_unknown_preset() {
        let args = Args::parse_from(["bubble-analysis", "--preset", "nope"]);
        let err = build_config(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("standard, quick, doubling, large"));
    }

    #[test]
    fn test_bad_case_rejected() {
        assert!(Args::try_parse_from(["bubble-analysis", "--case", "median"]).is_err());
    }

    #[test]
    fn test_dependent_flags_need_their_parent() {
        assert!(Args::try_parse_from(["bubble-analysis", "--record-events"]).is_err());
        assert!(Args::try_parse_from(["bubble-analysis", "--trace-passes"]).is_err());

        let args = Args::try_parse_from([
            "bubble-analysis",
            "--json",
            "run.json",
            "--record-events",
            "-v",
            "--trace-passes",
        ])
        .unwrap();
        assert!(args.record_events && args.trace_passes);
        assert!(build_config(&args).unwrap().record_events);
    }
}
