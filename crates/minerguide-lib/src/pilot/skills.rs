//! Skills read by the mining rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ItemKind};

/// Highest trainable skill level.
pub const MAX_SKILL_LEVEL: u8 = 5;

/// Skills that influence mining, drone, hull or fleet boost calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Mining,
    Astrogeology,
    IceHarvesting,
    GasCloudHarvesting,
    MiningBarge,
    Exhumers,
    MiningFrigate,
    ExpeditionFrigates,
    MiningDroneOperation,
    MiningDroneSpecialization,
    DroneInterfacing,
    MiningForeman,
    WarfareLinkSpecialist,
    IndustrialCommandShips,
    CapitalIndustrialShips,
}

impl Skill {
    /// All known skills in display order.
    pub const ALL: [Skill; 15] = [
        Skill::Mining,
        Skill::Astrogeology,
        Skill::IceHarvesting,
        Skill::GasCloudHarvesting,
        Skill::MiningBarge,
        Skill::Exhumers,
        Skill::MiningFrigate,
        Skill::ExpeditionFrigates,
        Skill::MiningDroneOperation,
        Skill::MiningDroneSpecialization,
        Skill::DroneInterfacing,
        Skill::MiningForeman,
        Skill::WarfareLinkSpecialist,
        Skill::IndustrialCommandShips,
        Skill::CapitalIndustrialShips,
    ];

    /// In-game type identifier.
    pub fn type_id(self) -> u32 {
        match self {
            Skill::Mining => 3386,
            Skill::Astrogeology => 3410,
            Skill::IceHarvesting => 16281,
            Skill::GasCloudHarvesting => 25544,
            Skill::MiningBarge => 17940,
            Skill::Exhumers => 22551,
            Skill::MiningFrigate => 32918,
            Skill::ExpeditionFrigates => 33856,
            Skill::MiningDroneOperation => 3438,
            Skill::MiningDroneSpecialization => 22541,
            Skill::DroneInterfacing => 3442,
            Skill::MiningForeman => 22552,
            Skill::WarfareLinkSpecialist => 3348,
            Skill::IndustrialCommandShips => 29637,
            Skill::CapitalIndustrialShips => 28374,
        }
    }

    /// In-game display name.
    pub fn name(self) -> &'static str {
        match self {
            Skill::Mining => "Mining",
            Skill::Astrogeology => "Astrogeology",
            Skill::IceHarvesting => "Ice Harvesting",
            Skill::GasCloudHarvesting => "Gas Cloud Harvesting",
            Skill::MiningBarge => "Mining Barge",
            Skill::Exhumers => "Exhumers",
            Skill::MiningFrigate => "Mining Frigate",
            Skill::ExpeditionFrigates => "Expedition Frigates",
            Skill::MiningDroneOperation => "Mining Drone Operation",
            Skill::MiningDroneSpecialization => "Mining Drone Specialization",
            Skill::DroneInterfacing => "Drone Interfacing",
            Skill::MiningForeman => "Mining Foreman",
            Skill::WarfareLinkSpecialist => "Warfare Link Specialist",
            Skill::IndustrialCommandShips => "Industrial Command Ships",
            Skill::CapitalIndustrialShips => "Capital Industrial Ships",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a skill from its display name, snake_case identifier, or numeric type id.
impl FromStr for Skill {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(type_id) = trimmed.parse::<u32>() {
            if let Some(skill) = Skill::ALL.iter().find(|sk| sk.type_id() == type_id) {
                return Ok(*skill);
            }
        }

        let key = normalize_skill_key(trimmed);
        Skill::ALL
            .iter()
            .find(|sk| normalize_skill_key(sk.name()) == key)
            .copied()
            .ok_or_else(|| Error::UnknownItem {
                kind: ItemKind::Skill,
                name: trimmed.to_string(),
                suggestions: crate::catalog::suggest(trimmed, Skill::ALL.iter().map(|s| s.name())),
            })
    }
}

/// Lowercase and drop separators so "Mining Foreman", "mining_foreman" and
/// "MiningForeman" compare equal.
fn normalize_skill_key(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
