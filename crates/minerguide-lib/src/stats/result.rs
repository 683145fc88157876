use serde::{Deserialize, Serialize};

/// Stats calculated for one miner, ship and booster combination.
///
/// Every field is finite; degenerate inputs saturate rather than produce
/// NaN or infinity (see [`SECS_FOR_ORE_HOLD_SATURATED`](super::SECS_FOR_ORE_HOLD_SATURATED)).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatedStats {
    /// Yield of one turret per cycle, in m3.
    pub turret_yield: f64,
    /// Yield of all turrets per cycle, in m3.
    pub combined_turret_yield: f64,
    /// Turret cycle, in seconds.
    pub turret_cycle: f64,
    /// Yield of one turret, in m3/s.
    pub turret_m3_per_sec: f64,
    /// Yield of all turrets, in m3/s.
    pub combined_turret_m3_per_sec: f64,
    /// Yield of one drone per cycle, in m3.
    pub drone_yield: f64,
    /// Yield of all drones per cycle, in m3.
    pub combined_drone_yield: f64,
    /// Drone cycle, in seconds.
    pub drone_cycle: f64,
    /// Yield of all drones, in m3/s.
    pub drone_m3_per_sec: f64,
    /// Turrets and drones together, in m3/s.
    pub total_m3_per_sec: f64,
    /// Ore moved to the station per hour, including unload trips, in m3.
    pub total_m3_per_hour: f64,
    /// Harvester optimal range, in metres.
    pub optimal: u32,
    /// Ore hold capacity, in m3.
    pub ore_hold: u32,
    /// Whole seconds to fill the ore hold.
    pub secs_for_ore_hold: u32,
    /// Seconds to fill the ore hold before truncation; the hourly figure is derived from this.
    pub secs_for_ore_hold_exact: f64,
    /// Realized foreman link cycle bonus, in percent.
    pub link_cycle_bonus: f64,
    /// Realized foreman link optimal bonus, in percent.
    pub link_optimal_bonus: f64,
}
