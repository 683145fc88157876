//! Stats command handler.

use std::path::Path;

use anyhow::{Context, Result};

use minerguide_lib::{Catalog, StatsReport};

use super::{load_fit, OutputFormat};
use crate::terminal::{format_with_separators, ColorPalette};

/// Handle the stats subcommand: calculate and print one fit.
pub fn handle_stats(
    catalog: &Catalog,
    fit_path: &Path,
    mercoxit: bool,
    format: OutputFormat,
) -> Result<()> {
    let fit = load_fit(catalog, fit_path, mercoxit)?;
    let report = StatsReport::from_fit(&fit);

    match format {
        OutputFormat::Text => print!("{}", render_report(&report, &ColorPalette::detect())),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("failed to serialize stats report")?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Library text report with a highlighted heading and an hourly summary line.
pub fn render_report(report: &StatsReport, palette: &ColorPalette) -> String {
    let text = report.render_text();
    let (heading, body) = text.split_once('\n').unwrap_or((text.as_str(), ""));
    let hourly = format_with_separators(report.stats.total_m3_per_hour.round() as u64);
    format!(
        "{}\n{body}\n{}\n",
        palette.heading(heading),
        palette.heading(&format!("{hourly} m3 per hour"))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use minerguide_lib::CalculatedStats;

    fn report(hourly: f64) -> StatsReport {
        StatsReport {
            fit: "Test".to_string(),
            hull: "Venture".to_string(),
            turret: "Miner I".to_string(),
            turret_count: 2,
            mercoxit: false,
            stats: CalculatedStats {
                turret_yield: 80.0,
                combined_turret_yield: 160.0,
                turret_cycle: 60.0,
                turret_m3_per_sec: 80.0 / 60.0,
                combined_turret_m3_per_sec: 160.0 / 60.0,
                drone_yield: 0.0,
                combined_drone_yield: 0.0,
                drone_cycle: 0.0,
                drone_m3_per_sec: 0.0,
                total_m3_per_sec: 160.0 / 60.0,
                total_m3_per_hour: hourly,
                optimal: 10_000,
                ore_hold: 5_000,
                secs_for_ore_hold: 1_875,
                secs_for_ore_hold_exact: 1_875.0,
                link_cycle_bonus: 0.0,
                link_optimal_bonus: 0.0,
            },
        }
    }

    #[test]
    fn report_ends_with_hourly_summary() {
        let text = render_report(&report(9_600.4), &ColorPalette::plain());
        assert!(text.starts_with("Test: Venture with 2 x Miner I\n"));
        assert!(text.trim_end().ends_with("9,600 m3 per hour"));
    }
}
