// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Global configuration model.
//!
//! The `[core]` and `[plugins]` sections belong to the framework and reject
//! unknown keys during deserialization. Every other top-level table is owned
//! by a plugin; those are collected untyped and checked after bootstrap
//! against the schema sections plugins registered.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fields recognized in the `[core]` section.
pub const CORE_FIELDS: &[&str] = &["log_level", "tmp_dir"];

/// Fields recognized in the `[plugins]` section.
pub const PLUGINS_FIELDS: &[&str] = &["disabled"];

/// Top-level Terrapipe configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TerrapipeConfig {
    /// Framework runtime settings.
    #[serde(default)]
    pub core: CoreConfig,

    /// Plugin loading settings.
    #[serde(default)]
    pub plugins: PluginsConfig,

    /// Plugin-owned sections keyed by section name.
    #[serde(flatten)]
    pub sections: BTreeMap<String, toml::Value>,
}

impl TerrapipeConfig {
    /// Returns a plugin-owned section if it is present and is a table.
    pub fn section(&self, name: &str) -> Option<&toml::Table> {
        self.sections.get(name).and_then(toml::Value::as_table)
    }

    /// Returns true if the named plugin is listed in `plugins.disabled`.
    pub fn is_plugin_disabled(&self, name: &str) -> bool {
        self.plugins.disabled.iter().any(|d| d == name)
    }
}

/// Framework runtime configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Scratch directory for pipeline commands. Defaults to the system temp dir.
    #[serde(default)]
    pub tmp_dir: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            tmp_dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Plugin loading configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginsConfig {
    /// Names of linked plugins that bootstrap must skip.
    #[serde(default)]
    pub disabled: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TerrapipeConfig::default();
        assert_eq!(config.core.log_level, "info");
        assert!(config.core.tmp_dir.is_none());
        assert!(config.plugins.disabled.is_empty());
        assert!(config.sections.is_empty());
    }

    #[test]
    fn plugin_sections_are_collected() {
        let toml_str = r#"
[core]
log_level = "debug"

[pytorch]
device = "cuda"
num_workers = 4
"#;
        let config: TerrapipeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.core.log_level, "debug");
        let section = config.section("pytorch").unwrap();
        assert_eq!(section["device"].as_str(), Some("cuda"));
        assert_eq!(section["num_workers"].as_integer(), Some(4));
        assert!(config.section("core").is_none());
    }

    #[test]
    fn core_denies_unknown_fields() {
        let result = toml::from_str::<TerrapipeConfig>("[core]\nlog_levle = \"debug\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn disabled_plugins_lookup() {
        let config: TerrapipeConfig =
            toml::from_str("[plugins]\ndisabled = [\"pytorch_backend\"]\n").unwrap();
        assert!(config.is_plugin_disabled("pytorch_backend"));
        assert!(!config.is_plugin_disabled("other"));
    }
}
