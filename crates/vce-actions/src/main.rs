//! Voice Commander Elite action inspector: entry point.
//!
//! Builds the action catalog from the player's Elite Dangerous bindings and
//! prints what the automation framework would see.
//!
//! # Usage
//!
//! ```text
//! vce-actions [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list       List registered actions (--unbound: commands without one)
//!   show       Show one action, e.g. `show PrimaryFireAction`
//!   condition  Print the game-window condition record (--simplified)
//!   locate     Print the binds file that would be loaded
//!   config     Print the effective settings as TOML
//!
//! Options:
//!   --config <PATH>         Settings file [default: platform config dir]
//!   --bindings-file <PATH>  Explicit binds file [env: VOICE_COMMANDER_ELITE_BINDINGS_FILE]
//!   --bindings-dir <PATH>   Directory to scan instead of the game's default
//! ```
//!
//! Log level comes from `RUST_LOG`, falling back to `[logging] level`.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use vce_actions::infrastructure::{bindings_file, config};
use vce_actions::{WindowIsActive, BINDINGS_FILE_ENV};

// ── CLI argument definitions ──────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "vce-actions",
    about = "Inspect press actions synthesized from Elite Dangerous custom bindings",
    version
)]
struct Cli {
    /// Settings file to read instead of the platform default.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Explicit binds file; skips directory scanning.
    #[arg(long, global = true, env = BINDINGS_FILE_ENV)]
    bindings_file: Option<PathBuf>,

    /// Directory to scan for Custom.<version>.binds files.
    #[arg(long, global = true)]
    bindings_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List registered actions.
    List {
        /// List game commands that have no action instead.
        #[arg(long)]
        unbound: bool,
    },
    /// Show one action by name.
    Show {
        /// Action name, e.g. `PrimaryFireAction`.
        name: String,
    },
    /// Print the game-window condition record.
    Condition {
        /// Record only the condition type name.
        #[arg(long)]
        simplified: bool,
    },
    /// Print the binds file that would be loaded.
    Locate,
    /// Print the effective settings as TOML.
    Config,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let (mut settings, settings_error) = match loaded {
        Ok(settings) => (settings, None),
        Err(e) => (config::AppConfig::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = settings_error {
        warn!(error = %e, "failed to load settings, using defaults");
    }

    settings = settings.with_bindings_file_override(cli.bindings_file);
    if let Some(dir) = cli.bindings_dir {
        settings.bindings.directory = Some(dir);
    }

    match cli.command {
        Command::List { unbound } => {
            let catalog = bindings_file::load_catalog(&settings.bindings);
            if let Some(reason) = catalog.load_failure() {
                warn!(reason, "no bindings loaded");
            }
            if unbound {
                for command in catalog.unbound_commands() {
                    println!("{command}");
                }
            } else {
                for action in catalog.iter() {
                    println!("{:<48} {:<8} {}", action.name(), action.device(), action.key());
                }
            }
        }
        Command::Show { name } => {
            let catalog = bindings_file::load_catalog(&settings.bindings);
            let action = catalog.lookup(&name)?;
            let summary = json!({
                "name": action.name(),
                "fqn": action.fqn(),
                "command": action.command(),
                "device": action.device(),
                "key": action.key(),
                "record": action.to_record(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Condition { simplified } => {
            let mut condition = WindowIsActive::elite_dangerous();
            if simplified {
                condition = condition.with_simplified_serialization();
            }
            println!("{}", serde_json::to_string_pretty(&condition.to_record())?);
        }
        Command::Locate => {
            let path = bindings_file::locate(&settings.bindings)
                .context("could not locate the bindings file")?;
            println!("{}", path.display());
        }
        Command::Config => {
            print!("{}", settings.to_toml()?);
        }
    }

    Ok(())
}
