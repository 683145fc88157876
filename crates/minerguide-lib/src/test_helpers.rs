// Test-only helpers for `minerguide-lib` unit tests
#![allow(dead_code)]
use crate::stats::{CalculatedStats, SECS_FOR_ORE_HOLD_SATURATED};

/// Builder to create `CalculatedStats` instances in tests with sensible defaults.
///
/// The defaults describe two strip miners pulling 648 m3 every 135 s into a
/// 12 000 m3 hold.
pub struct StatsBuilder {
    stats: CalculatedStats,
}

impl StatsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stats: CalculatedStats {
                turret_yield: 324.0,
                combined_turret_yield: 648.0,
                turret_cycle: 135.0,
                turret_m3_per_sec: 2.4,
                combined_turret_m3_per_sec: 4.8,
                drone_yield: 0.0,
                combined_drone_yield: 0.0,
                drone_cycle: 0.0,
                drone_m3_per_sec: 0.0,
                total_m3_per_sec: 4.8,
                total_m3_per_hour: 17_280.0,
                optimal: 15_000,
                ore_hold: 12_000,
                secs_for_ore_hold: 2_500,
                secs_for_ore_hold_exact: 2_500.0,
                link_cycle_bonus: 0.0,
                link_optimal_bonus: 0.0,
            },
        }
    }

    pub fn turret_cycle(mut self, secs: f64) -> Self {
        self.stats.turret_cycle = secs;
        self
    }

    pub fn drone_yield(mut self, m3: f64) -> Self {
        self.stats.drone_yield = m3;
        self
    }

    /// No throughput at all: the hold never fills.
    pub fn saturated(mut self) -> Self {
        self.stats.turret_m3_per_sec = 0.0;
        self.stats.combined_turret_m3_per_sec = 0.0;
        self.stats.total_m3_per_sec = 0.0;
        self.stats.total_m3_per_hour = 0.0;
        self.stats.secs_for_ore_hold = SECS_FOR_ORE_HOLD_SATURATED;
        self.stats.secs_for_ore_hold_exact = f64::from(SECS_FOR_ORE_HOLD_SATURATED);
        self
    }

    pub fn build(self) -> CalculatedStats {
        self.stats
    }
}

impl Default for StatsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
