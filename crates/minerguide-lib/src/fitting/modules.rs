//! Fitted module records: harvesters, crystals, upgrades, rigs and drones.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Harvester category. Each category follows its own yield and cycle rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurretKind {
    MiningLaser,
    StripMiner,
    GasHarvester,
    IceHarvester,
}

impl fmt::Display for TurretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TurretKind::MiningLaser => "mining laser",
            TurretKind::StripMiner => "strip miner",
            TurretKind::GasHarvester => "gas harvester",
            TurretKind::IceHarvester => "ice harvester",
        };
        f.write_str(value)
    }
}

/// What a harvester extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarvestableKind {
    Ore,
    Mercoxit,
    Ice,
    Gas,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turret {
    pub name: String,
    pub kind: TurretKind,
    pub harvestable: HarvestableKind,
    /// Yield per cycle, in m3.
    pub base_yield: f64,
    /// Cycle duration, in seconds.
    pub cycle_secs: f64,
    /// Optimal range, in metres.
    pub optimal_range: u32,
    #[serde(default)]
    pub uses_crystals: bool,
}

impl Turret {
    pub fn validate(&self) -> Result<()> {
        require_name("turret", &self.name)?;
        require_positive(&self.name, "base_yield", self.base_yield)?;
        require_positive(&self.name, "cycle_secs", self.cycle_secs)
    }
}

/// Mining crystal loaded into a crystal-using harvester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crystal {
    pub name: String,
    /// Yield multiplier against ordinary ore.
    pub ore_mod: f64,
    /// Yield multiplier against mercoxit.
    pub merc_mod: f64,
}

impl Crystal {
    pub fn validate(&self) -> Result<()> {
        require_name("crystal", &self.name)?;
        require_positive(&self.name, "ore_mod", self.ore_mod)?;
        require_positive(&self.name, "merc_mod", self.merc_mod)
    }
}

/// Low-slot harvester upgrade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestUpgrade {
    pub name: String,
    /// Mining laser and strip miner yield bonus, in percent.
    #[serde(default)]
    pub ore_yield_bonus: f64,
    /// Ice harvester cycle reduction, in percent.
    #[serde(default)]
    pub ice_cycle_bonus: f64,
}

impl HarvestUpgrade {
    pub fn validate(&self) -> Result<()> {
        require_name("harvest upgrade", &self.name)?;
        require_non_negative(&self.name, "ore_yield_bonus", self.ore_yield_bonus)?;
        require_reduction(&self.name, "ice_cycle_bonus", self.ice_cycle_bonus)
    }
}

/// Rig fitted into one of the hull's rig slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rig {
    pub name: String,
    /// Mining drone yield bonus, in percent.
    #[serde(default)]
    pub drone_yield_bonus: f64,
    /// Ice harvester cycle reduction, in percent.
    #[serde(default)]
    pub ice_cycle_bonus: f64,
    /// Mercoxit crystal yield bonus, in percent.
    #[serde(default)]
    pub mercoxit_yield_bonus: f64,
}

impl Rig {
    /// Placeholder for an unused rig slot.
    pub fn empty() -> Self {
        Self {
            name: "Empty".to_string(),
            drone_yield_bonus: 0.0,
            ice_cycle_bonus: 0.0,
            mercoxit_yield_bonus: 0.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_name("rig", &self.name)?;
        require_non_negative(&self.name, "drone_yield_bonus", self.drone_yield_bonus)?;
        require_reduction(&self.name, "ice_cycle_bonus", self.ice_cycle_bonus)?;
        require_non_negative(&self.name, "mercoxit_yield_bonus", self.mercoxit_yield_bonus)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningDrone {
    pub name: String,
    /// Yield per cycle, in m3.
    pub base_yield: f64,
    /// Cycle duration, in seconds.
    pub cycle_secs: f64,
}

impl MiningDrone {
    pub fn validate(&self) -> Result<()> {
        require_name("drone", &self.name)?;
        require_positive(&self.name, "base_yield", self.base_yield)?;
        require_positive(&self.name, "cycle_secs", self.cycle_secs)
    }
}

pub(crate) fn require_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::CatalogValidation {
            message: format!("{kind} name must not be empty"),
        });
    }
    Ok(())
}

pub(crate) fn require_positive(name: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::CatalogValidation {
            message: format!("'{name}': {field} must be a finite positive number"),
        });
    }
    Ok(())
}

pub(crate) fn require_non_negative(name: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::CatalogValidation {
            message: format!("'{name}': {field} must be a finite non-negative number"),
        });
    }
    Ok(())
}

/// Percent reductions must stay below 100 so cycle times remain positive.
pub(crate) fn require_reduction(name: &str, field: &str, value: f64) -> Result<()> {
    require_non_negative(name, field, value)?;
    if value >= 100.0 {
        return Err(Error::CatalogValidation {
            message: format!("'{name}': {field} must be below 100, got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_turret_cycle() {
        let turret = Turret {
            name: "Broken Miner".to_string(),
            kind: TurretKind::MiningLaser,
            harvestable: HarvestableKind::Ore,
            base_yield: 40.0,
            cycle_secs: 0.0,
            optimal_range: 10_000,
            uses_crystals: false,
        };
        let err = turret.validate().expect_err("zero cycle");
        assert!(err.to_string().contains("cycle_secs"));
    }

    #[test]
    fn rejects_negative_rig_bonus() {
        let rig = Rig {
            drone_yield_bonus: -5.0,
            ..Rig::empty()
        };
        assert!(rig.validate().is_err());
    }

    #[test]
    fn rejects_full_cycle_reduction() {
        let upgrade = HarvestUpgrade {
            name: "Impossible".to_string(),
            ore_yield_bonus: 0.0,
            ice_cycle_bonus: 100.0,
        };
        assert!(upgrade.validate().is_err());
    }

    #[test]
    fn empty_rig_is_valid_and_neutral() {
        let rig = Rig::empty();
        rig.validate().expect("empty rig valid");
        assert_eq!(rig.drone_yield_bonus, 0.0);
    }
}
