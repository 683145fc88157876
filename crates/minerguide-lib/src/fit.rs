//! Fit files: a miner, an optional booster and their ships, named by catalog entry.
//!
//! ```json
//! {
//!   "miner": { "all_skills": 4, "implants": ["Inherent Implants 'Highwall' Mining MX1005"] },
//!   "ship": {
//!     "hull": "Hulk",
//!     "turret": "Modulated Strip Miner II",
//!     "turret_count": 2,
//!     "crystal": "Veldspar Mining Crystal II",
//!     "upgrades": ["Mining Laser Upgrade II", "Mining Laser Upgrade II"]
//!   },
//!   "booster": { "all_skills": 5 },
//!   "booster_ship": { "hull": "Orca", "cycle_link": "Laser Optimization II" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::fitting::{BoosterShip, ForemanLink, Ship};
use crate::pilot::{load_skill_sheet, Implant, Pilot, Skill};
use crate::stats::{calculate_stats, CalculatedStats};

/// How a pilot's skills and implants are described in a fit file.
///
/// Skills start from `skill_sheet` or the `all_skills` preset (never both),
/// then entries in `skills` override individual levels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PilotSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub all_skills: Option<u8>,
    /// CSV skill sheet, relative to the fit file.
    #[serde(default)]
    pub skill_sheet: Option<PathBuf>,
    /// Skill name or type id to level.
    #[serde(default)]
    pub skills: BTreeMap<String, u8>,
    #[serde(default)]
    pub implants: Vec<String>,
    #[serde(default)]
    pub uses_hauler: bool,
    #[serde(default)]
    pub station_trip_secs: u32,
}

impl PilotSpec {
    pub fn resolve(&self, default_name: &str, base_dir: Option<&Path>) -> Result<Pilot> {
        let name = self.name.as_deref().unwrap_or(default_name);

        let mut pilot = match (&self.skill_sheet, self.all_skills) {
            (Some(_), Some(_)) => {
                return Err(Error::FitValidation {
                    message: format!("pilot '{name}': use either skill_sheet or all_skills, not both"),
                })
            }
            (Some(sheet), None) => {
                let path = match base_dir {
                    Some(dir) if sheet.is_relative() => dir.join(sheet),
                    _ => sheet.clone(),
                };
                load_skill_sheet(name, &path)?
            }
            (None, Some(level)) => Pilot::with_all_skills(name, level)?,
            (None, None) => Pilot::new(name),
        };

        for (skill, level) in &self.skills {
            pilot.set_skill(skill.parse::<Skill>()?, *level)?;
        }
        for implant in &self.implants {
            pilot.add_implant(implant.parse::<Implant>()?)?;
        }
        pilot.uses_hauler = self.uses_hauler;
        pilot.station_trip_secs = self.station_trip_secs;
        pilot.validate()?;
        Ok(pilot)
    }
}

/// Mining ship as listed in a fit file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShipSpec {
    pub hull: String,
    pub turret: String,
    pub turret_count: u32,
    #[serde(default)]
    pub crystal: Option<String>,
    #[serde(default)]
    pub upgrades: Vec<String>,
    /// Rigs in slot order; unlisted slots stay empty.
    #[serde(default)]
    pub rigs: Vec<String>,
    #[serde(default)]
    pub drone: Option<String>,
    #[serde(default)]
    pub drone_count: u32,
}

impl ShipSpec {
    pub fn resolve(&self, catalog: &Catalog) -> Result<Ship> {
        let hull = catalog.hull(&self.hull)?.clone();
        let turret = catalog.turret(&self.turret)?.clone();
        let mut ship = Ship::new(hull, turret, self.turret_count)?;

        if let Some(name) = &self.crystal {
            if !ship.turret().uses_crystals {
                warn!(
                    crystal = %name,
                    turret = %ship.turret().name,
                    "turret does not use crystals; crystal has no effect"
                );
            }
            ship = ship.with_crystal(catalog.crystal(name)?.clone())?;
        }

        let upgrades = self
            .upgrades
            .iter()
            .map(|name| catalog.upgrade(name).cloned())
            .collect::<Result<Vec<_>>>()?;
        ship = ship.with_upgrades(upgrades)?;

        let rigs = self
            .rigs
            .iter()
            .map(|name| catalog.rig(name).cloned())
            .collect::<Result<Vec<_>>>()?;
        ship = ship.with_rigs(rigs)?;

        match &self.drone {
            Some(name) => ship.with_drones(catalog.drone(name)?.clone(), self.drone_count),
            None if self.drone_count > 0 => Err(Error::FitValidation {
                message: format!("drone_count is {} but no drone is named", self.drone_count),
            }),
            None => Ok(ship),
        }
    }
}

/// Booster ship as listed in a fit file. Omitted links broadcast nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoosterShipSpec {
    pub hull: String,
    #[serde(default)]
    pub deployed: bool,
    #[serde(default)]
    pub cycle_link: Option<String>,
    #[serde(default)]
    pub optimal_link: Option<String>,
}

impl BoosterShipSpec {
    pub fn resolve(&self, catalog: &Catalog) -> Result<BoosterShip> {
        let hull = catalog.booster_hull(&self.hull)?.clone();
        if self.deployed && !hull.deployable {
            warn!(hull = %hull.name, "hull cannot deploy; using undeployed bonus");
        }
        let link = |name: &Option<String>| -> Result<ForemanLink> {
            match name {
                Some(name) => Ok(catalog.link(name)?.clone()),
                None => Ok(ForemanLink::none()),
            }
        };
        Ok(BoosterShip::new(
            hull,
            self.deployed,
            link(&self.cycle_link)?,
            link(&self.optimal_link)?,
        ))
    }
}

/// A complete fit file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FitConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub miner: PilotSpec,
    pub ship: ShipSpec,
    /// Omitted: an unskilled pilot with no boosts.
    #[serde(default)]
    pub booster: Option<PilotSpec>,
    /// Omitted: no booster on grid.
    #[serde(default)]
    pub booster_ship: Option<BoosterShipSpec>,
    #[serde(default)]
    pub mercoxit: bool,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl FitConfig {
    /// Read a fit file. Relative skill sheet paths resolve against its directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut config = Self::from_reader(file)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        if config.name.is_none() {
            config.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }
        Ok(config)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Look every named record up in `catalog` and build the pilots and ships.
    pub fn resolve(&self, catalog: &Catalog) -> Result<ResolvedFit> {
        let base_dir = self.base_dir.as_deref();
        let name = self.name.clone().unwrap_or_else(|| "fit".to_string());

        let miner = self.miner.resolve("Miner", base_dir)?;
        let booster = match &self.booster {
            Some(spec) => spec.resolve("Booster", base_dir)?,
            None => Pilot::new("No booster"),
        };
        let ship = self.ship.resolve(catalog)?;
        let booster_ship = match &self.booster_ship {
            Some(spec) => spec.resolve(catalog)?,
            None => BoosterShip::none(),
        };

        debug!(
            fit = %name,
            hull = %ship.hull().name,
            turret = %ship.turret().name,
            booster_hull = %booster_ship.hull.name,
            mercoxit = self.mercoxit,
            "resolved fit"
        );

        Ok(ResolvedFit {
            name,
            miner,
            booster,
            ship,
            booster_ship,
            mercoxit: self.mercoxit,
        })
    }
}

/// A fit with every name resolved, ready to calculate.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFit {
    pub name: String,
    pub miner: Pilot,
    pub booster: Pilot,
    pub ship: Ship,
    pub booster_ship: BoosterShip,
    pub mercoxit: bool,
}

impl ResolvedFit {
    pub fn calculate(&self) -> CalculatedStats {
        calculate_stats(
            &self.miner,
            &self.booster,
            &self.ship,
            &self.booster_ship,
            self.mercoxit,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> FitConfig {
        FitConfig::from_reader(json.as_bytes()).expect("fit parses")
    }

    #[test]
    fn minimal_fit_resolves_without_booster() {
        let catalog = Catalog::builtin().unwrap();
        let fit = parse(
            r#"{
                "miner": {},
                "ship": { "hull": "Venture", "turret": "Miner I", "turret_count": 2 }
            }"#,
        )
        .resolve(&catalog)
        .unwrap();

        assert_eq!(fit.booster_ship, BoosterShip::none());
        assert_eq!(fit.ship.rigs().len(), 3);
        assert_eq!(fit.booster.skill_level(Skill::MiningForeman), 0);
    }

    #[test]
    fn skill_overrides_apply_after_preset() {
        let spec = PilotSpec {
            all_skills: Some(5),
            skills: BTreeMap::from([("Astrogeology".to_string(), 3)]),
            ..PilotSpec::default()
        };
        let pilot = spec.resolve("Miner", None).unwrap();
        assert_eq!(pilot.skill_level(Skill::Mining), 5);
        assert_eq!(pilot.skill_level(Skill::Astrogeology), 3);
    }

    #[test]
    fn sheet_and_preset_conflict() {
        let spec = PilotSpec {
            all_skills: Some(5),
            skill_sheet: Some(PathBuf::from("skills.csv")),
            ..PilotSpec::default()
        };
        let err = spec.resolve("Miner", None).expect_err("conflicting sources");
        assert!(matches!(err, Error::FitValidation { .. }));
    }

    #[test]
    fn drone_count_requires_drone() {
        let catalog = Catalog::builtin().unwrap();
        let err = parse(
            r#"{
                "miner": {},
                "ship": { "hull": "Venture", "turret": "Miner I", "turret_count": 2, "drone_count": 2 }
            }"#,
        )
        .resolve(&catalog)
        .expect_err("drones without a drone type");
        assert!(err.to_string().contains("no drone is named"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = FitConfig::from_reader(
            r#"{ "miner": {}, "ship": { "hull": "Hulk", "turret": "Miner I", "turret_count": 1 }, "boostr": {} }"#
                .as_bytes(),
        );
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
