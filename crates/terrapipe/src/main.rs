// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terrapipe - geospatial machine-learning pipelines.
//!
//! Loads the global configuration, bootstraps the resource registry with
//! built-ins and every linked plugin, then dispatches the subcommand.

mod config_cmd;
mod plugins;
mod upgrade;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use terrapipe_config::TerrapipeConfig;
use terrapipe_registry::Registry;

#[cfg(feature = "pytorch")]
use terrapipe_pytorch_backend as _;

/// Terrapipe - geospatial machine-learning pipelines.
#[derive(Parser, Debug)]
#[command(name = "terrapipe", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List loaded plugins and registered resources.
    Plugins {
        /// Output structured JSON.
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
    /// Upgrade a serialized pipeline config to the current versions.
    Upgrade {
        /// JSON config file to upgrade.
        path: PathBuf,
        /// Write the result here instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show the global-config schema and the effective configuration.
    Config {
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref());
    init_tracing(&config.core.log_level);
    let registry = bootstrap_registry(&config, cli.config.as_deref());

    let result = match cli.command {
        Some(Commands::Plugins { json, plain }) => plugins::run_plugins(&registry, json, plain),
        Some(Commands::Upgrade { path, output }) => {
            upgrade::run_upgrade(&registry, &path, output.as_deref())
        }
        Some(Commands::Config { plain }) => config_cmd::run_config(&registry, &config, plain),
        None => {
            println!("terrapipe: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("terrapipe: {e}");
        std::process::exit(1);
    }
}

/// Load and validate the global config, exiting with rendered diagnostics on failure.
fn load_config(explicit: Option<&Path>) -> TerrapipeConfig {
    let loaded = match explicit {
        Some(path) => terrapipe_config::load_and_validate_path(path),
        None => terrapipe_config::load_and_validate(),
    };
    match loaded {
        Ok(config) => config,
        Err(errors) => {
            terrapipe_config::render_errors(&errors);
            std::process::exit(1);
        }
    }
}

/// Build the registry and check plugin-owned config sections against it.
fn bootstrap_registry(config: &TerrapipeConfig, explicit: Option<&Path>) -> Registry {
    let registry = match terrapipe_registry::bootstrap(config) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("terrapipe: bootstrap failed: {e}");
            std::process::exit(1);
        }
    };

    let sources = terrapipe_config::collect_toml_sources(explicit);
    if let Err(errors) =
        terrapipe_config::validate_sections(config, registry.get_rv_config_schema(), &sources)
    {
        terrapipe_config::render_errors(&errors);
        std::process::exit(1);
    }

    registry
}

/// Initialize the tracing subscriber with an env filter.
///
/// `RUST_LOG` overrides the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("terrapipe={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
