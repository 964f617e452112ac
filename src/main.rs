//! `subpath` command-line tool.
//!
//! Loads a TOML config (alias table, language prefixes) and resolves paths
//! through the sub-path resolver, for checking alias setups by hand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use subpath_alias::config::load_config;
use subpath_alias::observability::logging::init_logging;
use subpath_alias::routing::{build_resolver, OutboundOptions};

#[derive(Parser)]
#[command(name = "subpath")]
#[command(about = "Resolve sub-paths of aliased paths", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "subpath.toml")]
    config: PathBuf,

    /// Override the configured log level.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an incoming path to its canonical form
    Inbound {
        /// Path being processed.
        path: String,

        /// Original request path (defaults to PATH).
        #[arg(long)]
        request_path: Option<String>,

        /// Current language id for the `current` strategy.
        #[arg(long)]
        language: Option<String>,
    },
    /// Resolve a canonical path to its alias for link generation
    Outbound {
        /// Canonical path.
        path: String,

        /// Treat the link as absolute (no alias rewriting).
        #[arg(long)]
        absolute: bool,

        /// Print the result and collected metadata as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Load and validate the configuration
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let logging = init_logging(cli.log_level.as_deref().unwrap_or("info"));
    tracing::debug!(config = ?cli.config, "subpath v0.1.0 starting");

    let config = load_config(&cli.config)?;
    if cli.log_level.is_none() {
        logging.set_level(&config.observability.log_level)?;
    }

    match cli.command {
        Commands::Inbound {
            path,
            request_path,
            language,
        } => {
            let resolver = build_resolver(&config, language.as_deref());
            let request_path = request_path.as_deref().unwrap_or(&path);
            let resolved = resolver.resolve_inbound(&path, request_path)?;
            println!("{resolved}");
        }
        Commands::Outbound {
            path,
            absolute,
            json,
        } => {
            let resolver = build_resolver(&config, None);
            let mut options = OutboundOptions {
                absolute,
                ..OutboundOptions::default()
            };
            let resolved = resolver.resolve_outbound(&path, &mut options)?;
            if json {
                let out = serde_json::json!({
                    "path": resolved,
                    "metadata": options.metadata,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{resolved}");
            }
        }
        Commands::Check => {
            println!(
                "{}: ok ({} aliases, {} languages, strategy {:?})",
                cli.config.display(),
                config.aliases.len(),
                config.language.languages.len(),
                config.language.strategy
            );
        }
    }

    Ok(())
}
