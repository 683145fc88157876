//! Compare command handler.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use minerguide_lib::{Catalog, StatsComparison, StatsReport};

use super::{load_fit, OutputFormat};
use crate::terminal::ColorPalette;

#[derive(Debug, Serialize)]
struct ComparisonOutput<'a> {
    baseline: &'a StatsReport,
    candidate: &'a StatsReport,
    comparison: &'a StatsComparison,
}

/// Handle the compare subcommand: per-metric deltas of a candidate fit against a baseline.
pub fn handle_compare(
    catalog: &Catalog,
    baseline_path: &Path,
    candidate_path: &Path,
    mercoxit: bool,
    format: OutputFormat,
) -> Result<()> {
    let baseline = StatsReport::from_fit(&load_fit(catalog, baseline_path, mercoxit)?);
    let candidate = StatsReport::from_fit(&load_fit(catalog, candidate_path, mercoxit)?);
    let comparison = StatsComparison::between(&baseline.stats, &candidate.stats);

    match format {
        OutputFormat::Text => {
            let palette = ColorPalette::detect();
            println!("Baseline:  {}", palette.heading(&baseline.fit));
            println!("Candidate: {}", palette.heading(&candidate.fit));
            println!();
            print!(
                "{}",
                comparison.render_with(|trend, text| palette.trend(trend, text))
            );
        }
        OutputFormat::Json => {
            let output = ComparisonOutput {
                baseline: &baseline,
                candidate: &candidate,
                comparison: &comparison,
            };
            let json = serde_json::to_string_pretty(&output)
                .context("failed to serialize comparison")?;
            println!("{json}");
        }
    }
    Ok(())
}
