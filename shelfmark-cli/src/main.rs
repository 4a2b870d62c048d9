//! Shelfmark CLI - Interactive shell for a personal library catalog

mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use shelfmark_core::{CatalogConfig, CatalogStore, DEFAULT_BACKING_FILE};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shelfmark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog backing file
    #[arg(short, long, default_value = DEFAULT_BACKING_FILE)]
    file: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shelfmark_cli=debug,shelfmark_core=debug"
    } else {
        "shelfmark_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut store = CatalogStore::open(CatalogConfig::new(&cli.file))
        .with_context(|| format!("Failed to open catalog at {}", cli.file.display()))?;

    tracing::debug!(
        path = %store.backing_file().display(),
        books = store.len(),
        "catalog loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&mut store, stdin.lock(), stdout.lock())
}
