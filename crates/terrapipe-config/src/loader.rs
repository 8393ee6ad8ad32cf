// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./terrapipe.toml` > `~/.config/terrapipe/terrapipe.toml` >
//! `/etc/terrapipe/terrapipe.toml`, with `TERRAPIPE_` environment overrides on top.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TerrapipeConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/terrapipe/terrapipe.toml";

/// Config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "terrapipe.toml";

/// Path of the per-user config file, if a config dir exists on this platform.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("terrapipe").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/terrapipe/terrapipe.toml`
/// 3. `~/.config/terrapipe/terrapipe.toml`
/// 4. `./terrapipe.toml`
/// 5. `TERRAPIPE_*` environment variables
pub fn load_config() -> Result<TerrapipeConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only, without files or env vars.
pub fn load_config_from_str(toml_content: &str) -> Result<TerrapipeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TerrapipeConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from an explicit file with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TerrapipeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TerrapipeConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the layered Figment before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(TerrapipeConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Environment provider mapping `TERRAPIPE_*` variables onto config keys.
///
/// Uses `Env::map()` rather than `Env::split("_")` since field names contain
/// underscores: `TERRAPIPE_CORE_LOG_LEVEL` must become `core.log_level`.
fn env_provider() -> Env {
    Env::prefixed("TERRAPIPE_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a prefix-stripped env var name onto a dotted, lowercase config key.
///
/// Figment hands the name over in its original case. Framework sections are
/// matched by prefix. Plugin sections use a double underscore between section
/// and field: `TERRAPIPE_PYTORCH__NUM_WORKERS` becomes `pytorch.num_workers`.
pub(crate) fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    if key.contains("__") {
        return key.replacen("__", ".", 1);
    }
    for section in ["core", "plugins"] {
        if let Some(field) = key.strip_prefix(section).and_then(|rest| rest.strip_prefix('_')) {
            return format!("{section}.{field}");
        }
    }
    key
}
