use std::fmt::Write;

use serde::Serialize;

use crate::fit::ResolvedFit;
use crate::stats::{CalculatedStats, SECS_FOR_ORE_HOLD_SATURATED};

/// One reported figure of [`CalculatedStats`].
#[derive(Clone, Copy)]
pub struct Metric {
    /// Field name, as in the JSON output.
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    precision: usize,
    higher_is_better: bool,
    /// Value may be the no-throughput sentinel.
    saturates: bool,
    value: fn(&CalculatedStats) -> f64,
}

impl Metric {
    pub fn value(&self, stats: &CalculatedStats) -> f64 {
        (self.value)(stats)
    }

    fn is_saturated(&self, value: f64) -> bool {
        self.saturates && value >= f64::from(SECS_FOR_ORE_HOLD_SATURATED)
    }

    fn format(&self, value: f64) -> String {
        if self.is_saturated(value) {
            "never".to_string()
        } else {
            format!("{value:.prec$} {}", self.unit, prec = self.precision)
        }
    }
}

/// Reported metrics, in report order.
pub const METRICS: [Metric; 16] = [
    metric("turret_yield", "Turret yield", "m3", 2, true, |s| s.turret_yield),
    metric("combined_turret_yield", "Combined turret yield", "m3", 2, true, |s| {
        s.combined_turret_yield
    }),
    metric("turret_cycle", "Turret cycle", "s", 2, false, |s| s.turret_cycle),
    metric("turret_m3_per_sec", "Turret rate", "m3/s", 3, true, |s| {
        s.turret_m3_per_sec
    }),
    metric("combined_turret_m3_per_sec", "Combined turret rate", "m3/s", 3, true, |s| {
        s.combined_turret_m3_per_sec
    }),
    metric("drone_yield", "Drone yield", "m3", 2, true, |s| s.drone_yield),
    metric("combined_drone_yield", "Combined drone yield", "m3", 2, true, |s| {
        s.combined_drone_yield
    }),
    metric("drone_cycle", "Drone cycle", "s", 2, false, |s| s.drone_cycle),
    metric("drone_m3_per_sec", "Drone rate", "m3/s", 3, true, |s| s.drone_m3_per_sec),
    metric("total_m3_per_sec", "Total rate", "m3/s", 3, true, |s| s.total_m3_per_sec),
    metric("total_m3_per_hour", "Hourly yield", "m3/h", 0, true, |s| {
        s.total_m3_per_hour
    }),
    metric("optimal", "Optimal range", "m", 0, true, |s| f64::from(s.optimal)),
    metric("ore_hold", "Ore hold", "m3", 0, true, |s| f64::from(s.ore_hold)),
    Metric {
        saturates: true,
        ..metric("secs_for_ore_hold_exact", "Time to fill hold", "s", 1, false, |s| {
            s.secs_for_ore_hold_exact
        })
    },
    metric("link_cycle_bonus", "Link cycle bonus", "%", 2, true, |s| s.link_cycle_bonus),
    metric("link_optimal_bonus", "Link optimal bonus", "%", 2, true, |s| {
        s.link_optimal_bonus
    }),
];

const fn metric(
    key: &'static str,
    label: &'static str,
    unit: &'static str,
    precision: usize,
    higher_is_better: bool,
    value: fn(&CalculatedStats) -> f64,
) -> Metric {
    Metric {
        key,
        label,
        unit,
        precision,
        higher_is_better,
        saturates: false,
        value,
    }
}

/// Stats for one fit, with enough context to label them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsReport {
    pub fit: String,
    pub hull: String,
    pub turret: String,
    pub turret_count: u32,
    pub mercoxit: bool,
    pub stats: CalculatedStats,
}

impl StatsReport {
    pub fn from_fit(fit: &ResolvedFit) -> Self {
        Self {
            fit: fit.name.clone(),
            hull: fit.ship.hull().name.clone(),
            turret: fit.ship.turret().name.clone(),
            turret_count: fit.ship.turret_count(),
            mercoxit: fit.mercoxit,
            stats: fit.calculate(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{}: {} with {} x {}{}",
            self.fit,
            self.hull,
            self.turret_count,
            self.turret,
            if self.mercoxit { " (mercoxit)" } else { "" }
        );
        buffer.push_str(&render_stats_text(&self.stats));
        buffer
    }
}

/// Fixed-width text rendering of every metric.
pub fn render_stats_text(stats: &CalculatedStats) -> String {
    let mut buffer = String::new();
    for metric in &METRICS {
        let _ = writeln!(
            buffer,
            "  {:<24} {:>16}",
            metric.label,
            metric.format(metric.value(stats))
        );
    }
    buffer
}

/// Whether a change is an improvement for the metric it belongs to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Better,
    Worse,
    Unchanged,
}

/// Change in one metric between two fits.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricDelta {
    pub metric: &'static str,
    pub baseline: f64,
    pub candidate: f64,
    /// `candidate - baseline`; absent when either side never fills its hold.
    pub delta: Option<f64>,
    /// Relative change in percent; absent when the baseline is zero.
    pub percent: Option<f64>,
    pub trend: Trend,
}

/// Per-metric comparison of a candidate fit against a baseline.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsComparison {
    pub metrics: Vec<MetricDelta>,
}

impl StatsComparison {
    pub fn between(baseline: &CalculatedStats, candidate: &CalculatedStats) -> Self {
        let metrics = METRICS
            .iter()
            .map(|metric| {
                let before = metric.value(baseline);
                let after = metric.value(candidate);
                let comparable = !metric.is_saturated(before) && !metric.is_saturated(after);
                let delta = comparable.then_some(after - before);
                let percent = delta
                    .filter(|_| before != 0.0)
                    .map(|delta| delta / before * 100.0);
                let trend = match delta {
                    Some(d) if d > 0.0 => better_if(metric.higher_is_better),
                    Some(d) if d < 0.0 => better_if(!metric.higher_is_better),
                    Some(_) => Trend::Unchanged,
                    // Filling the hold at all beats never filling it.
                    None if metric.is_saturated(before) && !metric.is_saturated(after) => {
                        Trend::Better
                    }
                    None if !metric.is_saturated(before) && metric.is_saturated(after) => {
                        Trend::Worse
                    }
                    None => Trend::Unchanged,
                };
                MetricDelta {
                    metric: metric.key,
                    baseline: before,
                    candidate: after,
                    delta,
                    percent,
                    trend,
                }
            })
            .collect();
        Self { metrics }
    }

    /// Plain text table of every metric.
    pub fn render_text(&self) -> String {
        self.render_with(|_, text| text.to_string())
    }

    /// Text table with the delta column passed through `paint`, e.g. for terminal colors.
    pub fn render_with<F>(&self, paint: F) -> String
    where
        F: Fn(Trend, &str) -> String,
    {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "  {:<24} {:>16} {:>16} {:>22}",
            "Metric", "Baseline", "Candidate", "Change"
        );
        for (metric, delta) in METRICS.iter().zip(&self.metrics) {
            let change = match (delta.delta, delta.percent) {
                (Some(d), Some(p)) => format!("{d:+.prec$} ({p:+.1}%)", prec = metric.precision),
                (Some(d), None) => format!("{d:+.prec$}", prec = metric.precision),
                (None, _) => "n/a".to_string(),
            };
            let _ = writeln!(
                buffer,
                "  {:<24} {:>16} {:>16} {}",
                metric.label,
                metric.format(delta.baseline),
                metric.format(delta.candidate),
                paint(delta.trend, &format!("{change:>22}"))
            );
        }
        buffer
    }
}

fn better_if(condition: bool) -> Trend {
    if condition {
        Trend::Better
    } else {
        Trend::Worse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::StatsBuilder;

    #[test]
    fn text_report_lists_every_metric() {
        let stats = StatsBuilder::new().build();
        let text = render_stats_text(&stats);
        assert_eq!(text.lines().count(), METRICS.len());
        assert!(text.contains("Hourly yield"));
    }

    #[test]
    fn saturated_fill_time_renders_as_never() {
        let stats = StatsBuilder::new().saturated().build();
        let text = render_stats_text(&stats);
        assert!(text.contains("never"));
    }

    #[test]
    fn shorter_cycle_is_better() {
        let baseline = StatsBuilder::new().turret_cycle(180.0).build();
        let candidate = StatsBuilder::new().turret_cycle(135.0).build();
        let comparison = StatsComparison::between(&baseline, &candidate);
        let cycle = comparison
            .metrics
            .iter()
            .find(|m| m.metric == "turret_cycle")
            .unwrap();
        assert_eq!(cycle.delta, Some(-45.0));
        assert_eq!(cycle.percent, Some(-25.0));
        assert_eq!(cycle.trend, Trend::Better);
    }

    #[test]
    fn zero_baseline_has_no_percent() {
        let baseline = StatsBuilder::new().drone_yield(0.0).build();
        let candidate = StatsBuilder::new().drone_yield(25.0).build();
        let comparison = StatsComparison::between(&baseline, &candidate);
        let drones = comparison
            .metrics
            .iter()
            .find(|m| m.metric == "drone_yield")
            .unwrap();
        assert_eq!(drones.delta, Some(25.0));
        assert_eq!(drones.percent, None);
        assert_eq!(drones.trend, Trend::Better);
    }

    #[test]
    fn saturated_fill_time_is_not_diffed() {
        let baseline = StatsBuilder::new().saturated().build();
        let candidate = StatsBuilder::new().build();
        let comparison = StatsComparison::between(&baseline, &candidate);
        let fill = comparison
            .metrics
            .iter()
            .find(|m| m.metric == "secs_for_ore_hold_exact")
            .unwrap();
        assert_eq!(fill.delta, None);
        assert_eq!(fill.trend, Trend::Better);
        assert!(comparison.render_text().contains("n/a"));
    }
}
