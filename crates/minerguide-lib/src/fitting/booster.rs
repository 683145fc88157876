//! Fleet booster hulls and Mining Foreman links.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pilot::{Pilot, Skill};

use super::modules::{require_name, require_non_negative, require_reduction};

/// Hull flown by the fleet booster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoosterHull {
    pub name: String,
    /// Skill that scales link strength on this hull, if any.
    #[serde(default)]
    pub bonus_skill: Option<Skill>,
    /// Link strength bonus per skill level, in percent.
    #[serde(default)]
    pub bonus_per_level: f64,
    /// Hull can enter a deployed (industrial core) mode.
    #[serde(default)]
    pub deployable: bool,
    /// Link strength bonus per skill level while deployed, in percent.
    #[serde(default)]
    pub deployed_bonus_per_level: f64,
}

impl BoosterHull {
    /// Hull that adds nothing to link strength.
    pub fn neutral() -> Self {
        Self {
            name: "No booster".to_string(),
            bonus_skill: None,
            bonus_per_level: 0.0,
            deployable: false,
            deployed_bonus_per_level: 0.0,
        }
    }

    /// Multiplier this hull applies to foreman link strength for the given booster pilot.
    ///
    /// The deployed rate applies only when the hull is deployable and actually deployed.
    pub fn boost_modifier(&self, booster: &Pilot, deployed: bool) -> f64 {
        let Some(skill) = self.bonus_skill else {
            return 1.0;
        };
        let per_level = if deployed && self.deployable {
            self.deployed_bonus_per_level
        } else {
            self.bonus_per_level
        };
        1.0 + per_level * f64::from(booster.skill_level(skill)) / 100.0
    }

    pub fn validate(&self) -> Result<()> {
        require_name("booster hull", &self.name)?;
        require_non_negative(&self.name, "bonus_per_level", self.bonus_per_level)?;
        require_non_negative(
            &self.name,
            "deployed_bonus_per_level",
            self.deployed_bonus_per_level,
        )
    }
}

/// Mining Foreman link module. A link carries a cycle bonus, an optimal bonus, or neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForemanLink {
    pub name: String,
    /// Harvester cycle time reduction, in percent.
    #[serde(default)]
    pub cycle_bonus: f64,
    /// Harvester optimal range increase, in percent.
    #[serde(default)]
    pub optimal_bonus: f64,
}

impl ForemanLink {
    /// Placeholder for an empty link slot.
    pub fn none() -> Self {
        Self {
            name: "No link".to_string(),
            cycle_bonus: 0.0,
            optimal_bonus: 0.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_name("foreman link", &self.name)?;
        require_reduction(&self.name, "cycle_bonus", self.cycle_bonus)?;
        require_non_negative(&self.name, "optimal_bonus", self.optimal_bonus)
    }
}

/// The booster's ship: hull, deployment state and its two mining links.
#[derive(Debug, Clone, PartialEq)]
pub struct BoosterShip {
    pub hull: BoosterHull,
    pub deployed: bool,
    /// Link whose `cycle_bonus` is broadcast.
    pub cycle_link: ForemanLink,
    /// Link whose `optimal_bonus` is broadcast.
    pub optimal_link: ForemanLink,
}

impl BoosterShip {
    pub fn new(
        hull: BoosterHull,
        deployed: bool,
        cycle_link: ForemanLink,
        optimal_link: ForemanLink,
    ) -> Self {
        Self {
            hull,
            deployed,
            cycle_link,
            optimal_link,
        }
    }

    /// No booster on grid: neutral hull and empty links.
    pub fn none() -> Self {
        Self::new(
            BoosterHull::neutral(),
            false,
            ForemanLink::none(),
            ForemanLink::none(),
        )
    }
}

impl Default for BoosterShip {
    fn default() -> Self {
        Self::none()
    }
}
