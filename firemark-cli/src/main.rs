//! Firemark CLI - construction fire-risk scoring from inspection JSON documents

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use clap::{Parser, Subcommand};
use firemark_core::config;
use firemark_core::{assess_with_config, render_json, render_text};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "firemark")]
#[command(about = "Score building construction fire risk from inspection JSON documents")]
#[command(version = env!("FIREMARK_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score the buildings in a JSON document (a single object or an array)
    Score {
        /// Path to the building document
        path: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate or show configuration
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file without scoring anything
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            path,
            format,
            config: config_path,
        } => {
            let normalized_path = if path.is_relative() {
                std::env::current_dir()?.join(&path)
            } else {
                path
            };

            if !normalized_path.exists() {
                anyhow::bail!("Path does not exist: {}", normalized_path.display());
            }

            // Config is discovered next to the document unless given explicitly
            let search_dir = normalized_path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let resolved_config = config::load_and_resolve(&search_dir, config_path.as_deref())
                .context("failed to load configuration")?;

            if let Some(config_path) = &resolved_config.config_path {
                eprintln!("Using config: {}", config_path.display());
            }

            let reports = assess_with_config(&normalized_path, Some(&resolved_config))?;

            match format {
                OutputFormat::Text => print!("{}", render_text(&reports)),
                OutputFormat::Json => println!("{}", render_json(&reports)),
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let resolved = resolve_config_action(path.as_deref())?;
                match &resolved.config_path {
                    Some(path) => println!("Config is valid: {}", path.display()),
                    None => println!("No config file found; defaults are in effect"),
                }
            }
            ConfigAction::Show { path } => {
                let resolved = resolve_config_action(path.as_deref())?;
                if let Some(path) = &resolved.config_path {
                    eprintln!("Using config: {}", path.display());
                }
                println!("{:#?}", resolved);
            }
        },
    }

    Ok(())
}

fn resolve_config_action(
    explicit_path: Option<&std::path::Path>,
) -> anyhow::Result<firemark_core::ResolvedConfig> {
    let cwd = std::env::current_dir()?;
    config::load_and_resolve(&cwd, explicit_path).context("failed to load configuration")
}
