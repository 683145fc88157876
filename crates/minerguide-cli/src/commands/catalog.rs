//! Catalog discovery and the `catalog` listing command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use directories::ProjectDirs;

use minerguide_lib::{Catalog, ItemKind};

/// Environment variable naming a catalog file.
pub const CATALOG_ENV: &str = "MINERGUIDE_CATALOG";

/// Item kinds accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Hull,
    Turret,
    Crystal,
    Upgrade,
    Rig,
    Drone,
    BoosterHull,
    Link,
    Skill,
    Implant,
}

impl From<CatalogKind> for ItemKind {
    fn from(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Hull => ItemKind::Hull,
            CatalogKind::Turret => ItemKind::Turret,
            CatalogKind::Crystal => ItemKind::Crystal,
            CatalogKind::Upgrade => ItemKind::HarvestUpgrade,
            CatalogKind::Rig => ItemKind::Rig,
            CatalogKind::Drone => ItemKind::Drone,
            CatalogKind::BoosterHull => ItemKind::BoosterHull,
            CatalogKind::Link => ItemKind::ForemanLink,
            CatalogKind::Skill => ItemKind::Skill,
            CatalogKind::Implant => ItemKind::Implant,
        }
    }
}

/// Load the catalog.
///
/// Searches in the following order:
/// 1. The `--catalog` argument
/// 2. `MINERGUIDE_CATALOG` environment variable
/// 3. `catalog.json` in the platform config directory
/// 4. The built-in catalog
pub fn load_catalog(explicit: Option<&Path>) -> Result<Catalog> {
    match catalog_path(explicit) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using catalog file");
            Catalog::from_path(&path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))
        }
        None => Catalog::builtin().context("failed to load the built-in catalog"),
    }
}

fn catalog_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(env_path) = std::env::var_os(CATALOG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(env_path));
    }
    ProjectDirs::from("com", "minerguide", "minerguide")
        .map(|dirs| dirs.config_dir().join("catalog.json"))
        .filter(|path| path.exists())
}

/// Handle the catalog subcommand: list names of one kind, or of every catalog kind.
pub fn handle_catalog(catalog: &Catalog, kind: Option<CatalogKind>) -> Result<()> {
    let source = catalog
        .source_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());

    match kind {
        Some(kind) => {
            for name in catalog.names(kind.into()) {
                println!("{name}");
            }
        }
        None => {
            println!("Catalog: {source}");
            for kind in ItemKind::CATALOG {
                let names = catalog.names(kind);
                println!();
                println!("{} ({}):", kind, names.len());
                for name in names {
                    println!("  {name}");
                }
            }
        }
    }
    Ok(())
}
