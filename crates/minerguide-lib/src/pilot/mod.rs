//! Pilot skills, implants and the yield/cycle modifiers derived from them.
//!
//! - [`skills`] - Skill identifiers
//! - [`implants`] - Implants and per-slot implant sets
//! - [`sheet`] - CSV skill sheet import

pub mod implants;
pub mod sheet;
pub mod skills;

use std::collections::BTreeMap;

use crate::error::{Error, Result};

pub use implants::{Implant, ImplantSet};
pub use sheet::load_skill_sheet;
pub use skills::{Skill, MAX_SKILL_LEVEL};

/// Per-level bonus of Mining and Astrogeology to laser and strip miner yield, in percent.
const YIELD_SKILL_BONUS: f64 = 5.0;
/// Per-level ice harvester cycle reduction from Ice Harvesting, in percent.
const ICE_HARVESTING_BONUS: f64 = 5.0;
const DRONE_OPERATION_BONUS: f64 = 5.0;
const DRONE_SPECIALIZATION_BONUS: f64 = 2.0;
const DRONE_INTERFACING_BONUS: f64 = 10.0;
/// Per-level increase in foreman link strength from Warfare Link Specialist, in percent.
const LINK_SPECIALIST_BONUS: f64 = 10.0;

/// A character flying the mining ship or the booster.
#[derive(Debug, Clone, PartialEq)]
pub struct Pilot {
    pub name: String,
    skills: BTreeMap<Skill, u8>,
    default_level: u8,
    pub implants: ImplantSet,
    /// Ore is moved by a separate hauler, so no station round trip is needed.
    pub uses_hauler: bool,
    /// Seconds for a round trip to the station to unload.
    pub station_trip_secs: u32,
}

impl Pilot {
    /// A pilot with no trained skills.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skills: BTreeMap::new(),
            default_level: 0,
            implants: ImplantSet::new(),
            uses_hauler: false,
            station_trip_secs: 0,
        }
    }

    /// A pilot with every skill at `level`; individual skills can still be overridden.
    pub fn with_all_skills(name: impl Into<String>, level: u8) -> Result<Self> {
        validate_level(Skill::Mining, level)?;
        let mut pilot = Self::new(name);
        pilot.default_level = level;
        Ok(pilot)
    }

    pub fn set_skill(&mut self, skill: Skill, level: u8) -> Result<()> {
        validate_level(skill, level)?;
        self.skills.insert(skill, level);
        Ok(())
    }

    pub fn skill_level(&self, skill: Skill) -> u8 {
        self.skills
            .get(&skill)
            .copied()
            .unwrap_or(self.default_level)
    }

    pub fn add_implant(&mut self, implant: Implant) -> Result<()> {
        self.implants.insert(implant)
    }

    /// True when the Mining Foreman Mindlink occupies slot 10.
    pub fn has_mindlink(&self) -> bool {
        self.implants.slot(10) == Some(Implant::MiningForemanMindlink)
    }

    /// Pilot-side multiplier to mining laser and strip miner yield.
    pub fn mining_yield_modifier(&self) -> f64 {
        let implant_bonus: f64 = self.implants.iter().map(Implant::mining_yield_bonus).sum();
        self.per_level(Skill::Mining, YIELD_SKILL_BONUS)
            * self.per_level(Skill::Astrogeology, YIELD_SKILL_BONUS)
            * (1.0 + implant_bonus / 100.0)
    }

    /// Pilot-side multiplier to mining drone yield.
    pub fn drone_yield_modifier(&self) -> f64 {
        self.per_level(Skill::MiningDroneOperation, DRONE_OPERATION_BONUS)
            * self.per_level(Skill::MiningDroneSpecialization, DRONE_SPECIALIZATION_BONUS)
            * self.per_level(Skill::DroneInterfacing, DRONE_INTERFACING_BONUS)
    }

    /// Pilot-side multiplier to gas cloud harvester cycle time.
    pub fn gas_cycle_modifier(&self) -> f64 {
        let implant_bonus: f64 = self.implants.iter().map(Implant::gas_cycle_bonus).sum();
        1.0 - implant_bonus / 100.0
    }

    /// Pilot-side multiplier to ice harvester cycle time.
    pub fn ice_cycle_modifier(&self) -> f64 {
        let implant_bonus: f64 = self.implants.iter().map(Implant::ice_cycle_bonus).sum();
        (1.0 - ICE_HARVESTING_BONUS * f64::from(self.skill_level(Skill::IceHarvesting)) / 100.0)
            * (1.0 - implant_bonus / 100.0)
    }

    /// Multiplier a booster pilot applies to the strength of their foreman links.
    pub fn booster_link_modifier(&self) -> f64 {
        self.per_level(Skill::WarfareLinkSpecialist, LINK_SPECIALIST_BONUS)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::PilotValidation {
                message: "pilot name must not be empty".to_string(),
            });
        }
        Ok(())
    }

    fn per_level(&self, skill: Skill, percent_per_level: f64) -> f64 {
        1.0 + percent_per_level * f64::from(self.skill_level(skill)) / 100.0
    }
}

fn validate_level(skill: Skill, level: u8) -> Result<()> {
    if level > MAX_SKILL_LEVEL {
        return Err(Error::PilotValidation {
            message: format!(
                "{skill} level must be between 0 and {MAX_SKILL_LEVEL}, got {level}"
            ),
        });
    }
    Ok(())
}
