//! MinerGuide library entry points.
//!
//! This crate models mining pilots, their ships and fleet boosters, and
//! calculates the resulting yield, cycle time, range and ore hold figures.
//! Higher-level consumers (the CLI) should only depend on the items exported
//! here instead of reimplementing the rules.
//!

#![deny(warnings)]

pub mod catalog;
pub mod error;
pub mod fit;
pub mod fitting;
pub mod output;
pub mod pilot;
pub mod stats;

#[cfg(test)]
mod test_helpers;

pub use catalog::{Catalog, CatalogDocument};
pub use error::{Error, ItemKind, Result};
pub use fit::{FitConfig, ResolvedFit};
pub use fitting::{BoosterShip, Ship};
pub use output::{render_stats_text, StatsComparison, StatsReport};
pub use pilot::{load_skill_sheet, Pilot};
pub use stats::{calculate_stats, CalculatedStats};
