//! Write the sample dictionary to disk - run with: cargo run -p tridict-store --bin generate_sample

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tridict_store::{SqliteStore, sample::sample_size, seed_sample};

#[derive(Parser)]
#[command(about = "Generate a small sample dictionary database")]
struct Args {
    /// Where to write the database
    #[arg(default_value = "dictionary.db")]
    path: PathBuf,

    /// Replace the file if it already exists
    #[arg(long)]
    force: bool,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let args = Args::parse();

    if args.force && args.path.exists() {
        std::fs::remove_file(&args.path)
            .with_context(|| format!("failed to remove {}", args.path.display()))?;
    }

    let store = SqliteStore::create(&args.path).with_context(|| {
        format!("cannot create {} (use --force to overwrite)", args.path.display())
    })?;
    seed_sample(&store).context("failed to seed sample words")?;

    println!("Generated sample database: {}", args.path.display());
    println!("  - {} word pairs", sample_size());
    Ok(())
}
