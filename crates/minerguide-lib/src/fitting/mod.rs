//! Ship and booster fitting records.
//!
//! - [`hull`] - Mining hulls and their skill bonus tables
//! - [`modules`] - Harvesters, crystals, upgrades, rigs and drones
//! - [`booster`] - Booster hulls, foreman links and the booster ship
//! - [`ship`] - The assembled mining ship

pub mod booster;
pub mod hull;
pub mod modules;
pub mod ship;

pub use booster::{BoosterHull, BoosterShip, ForemanLink};
pub use hull::{BonusTarget, Hull, HullSkillBonus, SkillBonusModifiers, VALID_RIG_SLOTS};
pub use modules::{
    Crystal, HarvestUpgrade, HarvestableKind, MiningDrone, Rig, Turret, TurretKind,
};
pub use ship::{Ship, MAX_HARVEST_UPGRADES};
