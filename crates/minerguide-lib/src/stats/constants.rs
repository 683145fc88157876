//! Constants shared by the stat calculation phases.

/// Fleet boost amplification granted by the Mining Foreman Mindlink.
pub const MINDLINK_LINK_MULTIPLIER: f64 = 1.25;

/// Flat turret yield multiplier replacing the Mining Foreman skill bonus when the
/// booster carries the Mining Foreman Mindlink.
pub const MINDLINK_YIELD_MULTIPLIER: f64 = 1.15;

/// Turret yield bonus per booster level of Mining Foreman (fraction, not percent).
pub const FOREMAN_YIELD_PER_LEVEL: f64 = 0.02;

/// Stacking penalty weights for drone yield rigs, strongest rig first.
///
/// Only drone yield rigs are penalized; ice cycle and mercoxit rigs apply at
/// full strength in slot order.
pub const RIG_STACKING_WEIGHTS: [f64; 3] = [1.0, 0.87, 0.57];

/// Ceiling on the realized link cycle bonus, in percent. Keeps the link
/// cycle multiplier positive once booster multipliers are applied.
pub const MAX_LINK_CYCLE_BONUS: f64 = 99.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Reported seconds-to-fill when the ship has no throughput at all.
pub const SECS_FOR_ORE_HOLD_SATURATED: u32 = u32::MAX;
