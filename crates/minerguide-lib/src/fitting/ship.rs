//! A fully resolved mining ship.

use crate::error::{Error, Result};

use super::hull::Hull;
use super::modules::{Crystal, HarvestUpgrade, MiningDrone, Rig, Turret};

/// Most harvest upgrades a ship may carry.
pub const MAX_HARVEST_UPGRADES: usize = 2;

/// Mining ship with every fitted record resolved.
///
/// Construct through [`Ship::new`], which enforces the structural
/// invariants the calculator relies on: the rig list matches the hull's
/// rig slot count and at most two harvest upgrades are fitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    hull: Hull,
    turret: Turret,
    turret_count: u32,
    crystal: Option<Crystal>,
    upgrades: Vec<HarvestUpgrade>,
    rigs: Vec<Rig>,
    drone: Option<MiningDrone>,
    drone_count: u32,
}

impl Ship {
    /// Assemble a ship with empty rig slots, no upgrades, crystal or drones.
    pub fn new(hull: Hull, turret: Turret, turret_count: u32) -> Result<Self> {
        hull.validate()?;
        turret.validate()?;
        let rigs = vec![Rig::empty(); usize::from(hull.rig_slots())];
        Ok(Self {
            hull,
            turret,
            turret_count,
            crystal: None,
            upgrades: Vec::new(),
            rigs,
            drone: None,
            drone_count: 0,
        })
    }

    pub fn with_crystal(mut self, crystal: Crystal) -> Result<Self> {
        crystal.validate()?;
        self.crystal = Some(crystal);
        Ok(self)
    }

    pub fn with_upgrades(mut self, upgrades: Vec<HarvestUpgrade>) -> Result<Self> {
        if upgrades.len() > MAX_HARVEST_UPGRADES {
            return Err(Error::FitValidation {
                message: format!(
                    "at most {MAX_HARVEST_UPGRADES} harvest upgrades can be fitted, got {}",
                    upgrades.len()
                ),
            });
        }
        for upgrade in &upgrades {
            upgrade.validate()?;
        }
        self.upgrades = upgrades;
        Ok(self)
    }

    /// Fit rigs in slot order. Fewer rigs than slots leaves the rest empty.
    pub fn with_rigs(mut self, rigs: Vec<Rig>) -> Result<Self> {
        let slots = usize::from(self.hull.rig_slots());
        if rigs.len() > slots {
            return Err(Error::FitValidation {
                message: format!(
                    "{} has {slots} rig slots, got {} rigs",
                    self.hull.name,
                    rigs.len()
                ),
            });
        }
        for rig in &rigs {
            rig.validate()?;
        }
        let mut filled = rigs;
        filled.resize(slots, Rig::empty());
        self.rigs = filled;
        Ok(self)
    }

    pub fn with_drones(mut self, drone: MiningDrone, count: u32) -> Result<Self> {
        drone.validate()?;
        self.drone = Some(drone);
        self.drone_count = count;
        Ok(self)
    }

    pub fn hull(&self) -> &Hull {
        &self.hull
    }

    pub fn turret(&self) -> &Turret {
        &self.turret
    }

    pub fn turret_count(&self) -> u32 {
        self.turret_count
    }

    pub fn crystal(&self) -> Option<&Crystal> {
        self.crystal.as_ref()
    }

    pub fn upgrades(&self) -> &[HarvestUpgrade] {
        &self.upgrades
    }

    /// Rigs in slot order; always exactly `hull.rig_slots()` entries.
    pub fn rigs(&self) -> &[Rig] {
        &self.rigs
    }

    pub fn drone(&self) -> Option<&MiningDrone> {
        self.drone.as_ref()
    }

    pub fn drone_count(&self) -> u32 {
        self.drone_count
    }
}
