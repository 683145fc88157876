//! Reference catalog of hulls, modules, drones and booster equipment.
//!
//! The catalog is a JSON document with one array per item kind. A built-in
//! copy is compiled into the crate; [`Catalog::from_path`] loads a
//! user-maintained replacement.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, ItemKind, Result};
use crate::fitting::{BoosterHull, Crystal, ForemanLink, HarvestUpgrade, Hull, MiningDrone, Rig, Turret};
use crate::pilot::{Implant, Skill};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Most suggestions attached to an unknown-name error.
const MAX_SUGGESTIONS: usize = 3;

/// On-disk shape of a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub hulls: Vec<Hull>,
    #[serde(default)]
    pub turrets: Vec<Turret>,
    #[serde(default)]
    pub crystals: Vec<Crystal>,
    #[serde(default)]
    pub upgrades: Vec<HarvestUpgrade>,
    #[serde(default)]
    pub rigs: Vec<Rig>,
    #[serde(default)]
    pub drones: Vec<MiningDrone>,
    #[serde(default)]
    pub booster_hulls: Vec<BoosterHull>,
    #[serde(default)]
    pub links: Vec<ForemanLink>,
}

trait CatalogRecord {
    const KIND: ItemKind;
    fn record_name(&self) -> &str;
    fn validate_record(&self) -> Result<()>;
}

macro_rules! catalog_record {
    ($ty:ty, $kind:expr) => {
        impl CatalogRecord for $ty {
            const KIND: ItemKind = $kind;

            fn record_name(&self) -> &str {
                &self.name
            }

            fn validate_record(&self) -> Result<()> {
                self.validate()
            }
        }
    };
}

catalog_record!(Hull, ItemKind::Hull);
catalog_record!(Turret, ItemKind::Turret);
catalog_record!(Crystal, ItemKind::Crystal);
catalog_record!(HarvestUpgrade, ItemKind::HarvestUpgrade);
catalog_record!(Rig, ItemKind::Rig);
catalog_record!(MiningDrone, ItemKind::Drone);
catalog_record!(BoosterHull, ItemKind::BoosterHull);
catalog_record!(ForemanLink, ItemKind::ForemanLink);

/// Records of one kind keyed by normalized name.
#[derive(Debug, Clone)]
struct Table<T> {
    items: HashMap<String, T>,
}

impl<T: CatalogRecord> Table<T> {
    fn load(records: Vec<T>) -> Result<Self> {
        let mut items = HashMap::with_capacity(records.len());
        for record in records {
            record.validate_record()?;
            let key = normalize_name(record.record_name());
            if items.contains_key(&key) {
                return Err(Error::DuplicateItem {
                    kind: T::KIND,
                    name: record.record_name().trim().to_string(),
                });
            }
            items.insert(key, record);
        }
        Ok(Self { items })
    }

    fn get(&self, name: &str) -> Result<&T> {
        self.items
            .get(&normalize_name(name))
            .ok_or_else(|| Error::UnknownItem {
                kind: T::KIND,
                name: name.trim().to_string(),
                suggestions: suggest(name, self.items.values().map(|r| r.record_name())),
            })
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .items
            .values()
            .map(|r| r.record_name().to_string())
            .collect();
        names.sort();
        names
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Validated, name-indexed reference data.
#[derive(Debug, Clone)]
pub struct Catalog {
    hulls: Table<Hull>,
    turrets: Table<Turret>,
    crystals: Table<Crystal>,
    upgrades: Table<HarvestUpgrade>,
    rigs: Table<Rig>,
    drones: Table<MiningDrone>,
    booster_hulls: Table<BoosterHull>,
    links: Table<ForemanLink>,
    source: Option<PathBuf>,
}

impl Catalog {
    /// Catalog compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_reader(BUILTIN_CATALOG.as_bytes())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading catalog");
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Validate every record and index them by name.
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        let catalog = Self {
            hulls: Table::load(document.hulls)?,
            turrets: Table::load(document.turrets)?,
            crystals: Table::load(document.crystals)?,
            upgrades: Table::load(document.upgrades)?,
            rigs: Table::load(document.rigs)?,
            drones: Table::load(document.drones)?,
            booster_hulls: Table::load(document.booster_hulls)?,
            links: Table::load(document.links)?,
            source: None,
        };
        debug!(
            hulls = catalog.hulls.len(),
            turrets = catalog.turrets.len(),
            rigs = catalog.rigs.len(),
            links = catalog.links.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn hull(&self, name: &str) -> Result<&Hull> {
        self.hulls.get(name)
    }

    pub fn turret(&self, name: &str) -> Result<&Turret> {
        self.turrets.get(name)
    }

    pub fn crystal(&self, name: &str) -> Result<&Crystal> {
        self.crystals.get(name)
    }

    pub fn upgrade(&self, name: &str) -> Result<&HarvestUpgrade> {
        self.upgrades.get(name)
    }

    pub fn rig(&self, name: &str) -> Result<&Rig> {
        self.rigs.get(name)
    }

    pub fn drone(&self, name: &str) -> Result<&MiningDrone> {
        self.drones.get(name)
    }

    pub fn booster_hull(&self, name: &str) -> Result<&BoosterHull> {
        self.booster_hulls.get(name)
    }

    pub fn link(&self, name: &str) -> Result<&ForemanLink> {
        self.links.get(name)
    }

    /// Sorted display names of every item of `kind`.
    ///
    /// Skills and implants are not catalog data but are listed too, so a
    /// single call covers every name a fit file may reference.
    pub fn names(&self, kind: ItemKind) -> Vec<String> {
        match kind {
            ItemKind::Hull => self.hulls.names(),
            ItemKind::Turret => self.turrets.names(),
            ItemKind::Crystal => self.crystals.names(),
            ItemKind::HarvestUpgrade => self.upgrades.names(),
            ItemKind::Rig => self.rigs.names(),
            ItemKind::Drone => self.drones.names(),
            ItemKind::BoosterHull => self.booster_hulls.names(),
            ItemKind::ForemanLink => self.links.names(),
            ItemKind::Skill => sorted(Skill::ALL.iter().map(|s| s.name())),
            ItemKind::Implant => sorted(Implant::ALL.iter().map(|i| i.name())),
        }
    }

    /// File the catalog was read from; `None` for the built-in catalog.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Up to three candidates similar to `name`, best match first.
pub(crate) fn suggest<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let needle = normalize_name(name);
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| {
            let score = strsim::jaro_winkler(&needle, &normalize_name(candidate));
            (score, candidate)
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

fn sorted<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut names: Vec<String> = names.map(str::to_string).collect();
    names.sort();
    names
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().expect("builtin catalog parses");
        assert!(catalog.source_path().is_none());
        for kind in ItemKind::CATALOG {
            assert!(!catalog.names(kind).is_empty(), "no {kind} entries");
        }
    }

    #[test]
    fn lookups_ignore_case_and_padding() {
        let catalog = Catalog::builtin().unwrap();
        let hull = catalog.hull("  hulk ").unwrap();
        assert_eq!(hull.name, "Hulk");
    }

    #[test]
    fn suggest_ranks_closest_first() {
        let found = suggest("Hulc", ["Hulk", "Skiff", "Mackinaw"]);
        assert_eq!(found, vec!["Hulk".to_string()]);
    }

    #[test]
    fn suggest_caps_results() {
        let found = suggest("Miner", ["Miner I", "Miner II", "Miner III", "Miner IV"]);
        assert_eq!(found.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn duplicate_names_are_rejected_case_insensitively() {
        let document = CatalogDocument {
            rigs: vec![
                Rig {
                    name: "Rig A".to_string(),
                    ..Rig::empty()
                },
                Rig {
                    name: "rig a".to_string(),
                    ..Rig::empty()
                },
            ],
            ..CatalogDocument::default()
        };
        let err = Catalog::from_document(document).expect_err("duplicate rig");
        assert!(matches!(
            err,
            Error::DuplicateItem {
                kind: ItemKind::Rig,
                ..
            }
        ));
    }
}
