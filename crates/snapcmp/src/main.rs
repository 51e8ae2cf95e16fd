mod config;

use crate::config::{Config, Overrides};
use anyhow::{Context, Error, Result};
use clap::{Parser, Subcommand};
use snapcmp_core::{Comparator, Fingerprint};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "snapcmp.toml")]
    config: PathBuf,

    /// Intensity levels per color channel (2-6)
    #[arg(long)]
    detail: Option<u8>,

    /// Side of the square both images are scaled to
    #[arg(long)]
    side: Option<u32>,

    /// Percentage of fingerprint cells allowed to differ (0-100)
    #[arg(long)]
    tolerance: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether two images are visually equal
    Compare { first: PathBuf, second: PathBuf },
    /// Report files that are visually equal to an earlier file in the list
    Dedup {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Override with RUST_LOG env var, e.g.: RUST_LOG=snapcmp_core=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<bool, Error> {
    let config = if args.config.exists() {
        Config::load_from_file(&args.config)
            .with_context(|| format!("Failed to load config from {:?}", args.config))?
    } else {
        info!("No config at {:?}. Using defaults.", args.config);
        Config::default_config()
    };
    let config = config.with_overrides(Overrides {
        detail: args.detail,
        square_side: args.side,
        tolerance_percent: args.tolerance,
    })?;
    let comparator = Comparator::new(config.comparator);
    info!(
        "Comparator ready: {:?}, matcher: {:?}",
        comparator.config(),
        comparator.matcher()
    );

    match args.command {
        Command::Compare { first, second } => {
            let equal = comparator
                .compare_paths(&first, &second)
                .with_context(|| format!("Failed to compare {:?} with {:?}", first, second))?;
            println!("{}", if equal { "equal" } else { "different" });
            Ok(equal)
        }
        Command::Dedup { files } => {
            let duplicates = dedup(&comparator, &files)?;
            for (duplicate, original) in &duplicates {
                println!("{} == {}", duplicate.display(), original.display());
            }
            info!(
                "Dedup: {} files checked, {} duplicates",
                files.len(),
                duplicates.len()
            );
            Ok(duplicates.is_empty())
        }
    }
}

/// Pairs every file with the first earlier file it is visually equal to.
fn dedup(comparator: &Comparator, files: &[PathBuf]) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut originals: Vec<(&PathBuf, Fingerprint)> = Vec::new();
    let mut duplicates = Vec::new();

    for file in files {
        let fingerprint = comparator
            .fingerprint_path(file)
            .with_context(|| format!("Failed to fingerprint {:?}", file))?;

        let mut original = None;
        for (path, known) in &originals {
            if comparator.matches(known, &fingerprint)? {
                original = Some(*path);
                break;
            }
        }

        match original {
            Some(path) => duplicates.push((file.clone(), path.clone())),
            None => originals.push((file, fingerprint)),
        }
    }

    Ok(duplicates)
}
