// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod catalog;
pub mod compare;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use minerguide_lib::{Catalog, FitConfig, ResolvedFit};

/// Output format shared by the report commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Read a fit file and resolve it against the catalog.
pub fn load_fit(catalog: &Catalog, path: &Path, mercoxit: bool) -> Result<ResolvedFit> {
    let config = FitConfig::from_path(path)
        .with_context(|| format!("failed to read fit file {}", path.display()))?;
    let mut fit = config
        .resolve(catalog)
        .with_context(|| format!("failed to resolve fit {}", path.display()))?;
    fit.mercoxit |= mercoxit;
    Ok(fit)
}
