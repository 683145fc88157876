//! Mining yield statistics.

mod calculator;
mod constants;
mod result;

pub use calculator::calculate_stats;
pub use constants::{
    FOREMAN_YIELD_PER_LEVEL, MAX_LINK_CYCLE_BONUS, MINDLINK_LINK_MULTIPLIER,
    MINDLINK_YIELD_MULTIPLIER, RIG_STACKING_WEIGHTS, SECONDS_PER_HOUR,
    SECS_FOR_ORE_HOLD_SATURATED,
};
pub use result::CalculatedStats;
