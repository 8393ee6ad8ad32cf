// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Global configuration for the Terrapipe framework.
//!
//! Provides layered TOML loading (system, user, local, environment),
//! validation of the framework-owned sections, schema validation of
//! plugin-owned sections, and miette diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use terrapipe_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("log level: {}", config.core.log_level);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::TerrapipeConfig;
pub use validation::{validate_config, validate_sections};

/// Load configuration from the standard hierarchy and validate it.
///
/// Figment errors are converted into diagnostics with source spans taken
/// from whichever config files exist.
pub fn load_and_validate() -> Result<TerrapipeConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &collect_toml_sources(None),
        )),
    }
}

/// Load configuration from an explicit file and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<TerrapipeConfig, Vec<ConfigError>> {
    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &collect_toml_sources(Some(path)),
        )),
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<TerrapipeConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Collect `(path, content)` pairs of the config files that exist.
///
/// With `explicit` set, only that file is read; otherwise the standard
/// hierarchy is scanned, highest precedence first.
pub fn collect_toml_sources(explicit: Option<&Path>) -> Vec<(String, String)> {
    let candidates: Vec<std::path::PathBuf> = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => {
            let local = std::env::current_dir()
                .map(|d| d.join(loader::LOCAL_CONFIG_FILE))
                .unwrap_or_else(|_| loader::LOCAL_CONFIG_FILE.into());
            let mut paths = vec![local];
            paths.extend(loader::user_config_path());
            paths.push(loader::SYSTEM_CONFIG_PATH.into());
            paths
        }
    };

    let sources: Vec<(String, String)> = candidates
        .into_iter()
        .filter_map(|path| {
            std::fs::read_to_string(&path)
                .ok()
                .map(|content| (path.display().to_string(), content))
        })
        .collect();
    tracing::debug!(count = sources.len(), "collected config sources");
    sources
}
