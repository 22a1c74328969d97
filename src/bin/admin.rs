//! CLI administration tool for golinks.
//!
//! Runs the same checks the server performs, without starting it.
//!
//! # Usage
//!
//! ```bash
//! # Check whether paths would be routed to the redirect handler
//! cargo run --bin admin -- validate Test1 static/app.js
//!
//! # Check a seed file before deploying it
//! cargo run --bin admin -- seed seed.json
//!
//! # Load and validate configuration from the environment
//! cargo run --bin admin -- config
//! ```

use golinks::application::services::read_seed_file;
use golinks::config::{Config, StorageBackend};
use golinks::utils::shortlink_validator::check_shortlink;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

/// CLI tool for managing golinks.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether paths are valid shortlink candidates
    Validate {
        /// Paths without the leading slash (e.g. "Test1", "static/app.js")
        #[arg(required = true)]
        candidates: Vec<String>,
    },

    /// Validate a seed file without writing anything
    Seed {
        /// Path to the seed JSON file
        file: PathBuf,
    },

    /// Load and validate configuration from the environment
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { candidates } => validate_candidates(&candidates),
        Commands::Seed { file } => check_seed(file).await,
        Commands::Config => check_config(),
    }
}

/// Prints the validator's verdict for each candidate.
///
/// Exits with an error if any candidate is rejected, so the command can be
/// used in scripts.
fn validate_candidates(candidates: &[String]) -> Result<()> {
    let mut rejected = 0;

    for candidate in candidates {
        match check_shortlink(candidate) {
            Ok(()) => println!("{} {}", "✓".green(), candidate.bold()),
            Err(rejection) => {
                rejected += 1;
                println!(
                    "{} {} {}",
                    "✗".red(),
                    candidate.bold(),
                    format!("({})", rejection.reason()).dimmed()
                );
            }
        }
    }

    if rejected > 0 {
        anyhow::bail!("{} of {} candidates rejected", rejected, candidates.len());
    }
    Ok(())
}

async fn check_seed(file: PathBuf) -> Result<()> {
    println!("{}", "Checking seed file".bright_blue().bold());
    println!("  {}", file.display());
    println!();

    let records = read_seed_file(&file).await?;

    for record in &records {
        let status = if record.active {
            "active".green()
        } else {
            "inactive".yellow()
        };
        let code = if record.preserve_http_method { 307 } else { 302 };
        println!(
            "  {} → {} [{}, {}]",
            record.id.bold(),
            record.long_url,
            code,
            status
        );
    }

    println!();
    println!(
        "{}",
        format!("✓ {} records valid", records.len()).green().bold()
    );
    Ok(())
}

fn check_config() -> Result<()> {
    let config = Config::from_env()?;

    if let Err(e) = config.validate() {
        println!("{} {:#}", "✗ Invalid configuration:".red().bold(), e);
        return Err(e);
    }

    println!("{}", "✓ Configuration valid".green().bold());
    println!();
    println!("  {:<16} {}", "Listen:".bright_black(), config.listen_addr);
    println!("  {:<16} {}", "Fallback URL:".bright_black(), config.fallback_url);

    let storage = match (config.storage_backend, &config.storage_file) {
        (StorageBackend::File, Some(path)) => format!("file ({})", path),
        (backend, _) => backend.to_string(),
    };
    println!("  {:<16} {}", "Storage:".bright_black(), storage);

    let cache = if config.cache_enabled {
        format!(
            "moka ({} entries, {}s TTL)",
            config.cache_capacity, config.cache_ttl_seconds
        )
    } else {
        "disabled".to_string()
    };
    println!("  {:<16} {}", "Cache:".bright_black(), cache);
    println!("  {:<16} {}", "Static dir:".bright_black(), config.static_dir);

    Ok(())
}
