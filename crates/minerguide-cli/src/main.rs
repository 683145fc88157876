use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use minerguide_cli::commands::catalog::{handle_catalog, load_catalog, CatalogKind};
use minerguide_cli::commands::compare::handle_compare;
use minerguide_cli::commands::stats::handle_stats;
use minerguide_cli::commands::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Mining yield calculator for ship fits")]
struct Cli {
    /// Catalog file to use instead of MINERGUIDE_CATALOG, the config directory or the built-in data.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate yield, cycle and ore hold figures for a fit file.
    Stats {
        /// Fit file (JSON).
        fit: PathBuf,
        /// Treat mercoxit as the target ore.
        #[arg(long)]
        mercoxit: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compare a candidate fit against a baseline fit.
    Compare {
        baseline: PathBuf,
        candidate: PathBuf,
        /// Treat mercoxit as the target ore for both fits.
        #[arg(long)]
        mercoxit: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List catalog entries, optionally of a single kind.
    Catalog {
        #[arg(value_enum)]
        kind: Option<CatalogKind>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Command::Stats {
            fit,
            mercoxit,
            format,
        } => handle_stats(&catalog, &fit, mercoxit, format),
        Command::Compare {
            baseline,
            candidate,
            mercoxit,
            format,
        } => handle_compare(&catalog, &baseline, &candidate, mercoxit, format),
        Command::Catalog { kind } => handle_catalog(&catalog, kind),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
