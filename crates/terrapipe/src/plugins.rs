// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `terrapipe plugins` command implementation.
//!
//! Lists loaded plugins and every runner, filesystem, and config type the
//! registry holds after bootstrap.

use std::io::IsTerminal;

use serde::Serialize;
use terrapipe_core::TerrapipeError;
use terrapipe_registry::{LoadedPlugin, Registry, FRAMEWORK_VERSION};

/// A registered config type with its current version.
#[derive(Debug, Serialize)]
pub struct ConfigTypeEntry {
    pub type_hint: String,
    pub version: u32,
    pub description: String,
}

/// Structured output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct PluginsReport {
    pub framework_version: String,
    pub plugins: Vec<LoadedPlugin>,
    pub runners: Vec<String>,
    pub file_systems: Vec<String>,
    pub config_types: Vec<ConfigTypeEntry>,
}

/// Collect the registry contents into a report.
pub fn build_report(registry: &Registry) -> Result<PluginsReport, TerrapipeError> {
    let config_types = registry
        .config_type_hints()
        .into_iter()
        .map(|type_hint| -> Result<ConfigTypeEntry, TerrapipeError> {
            let version = registry.get_config_upgraders(type_hint)?.version();
            let description = registry.get_config(type_hint)?.description().to_string();
            Ok(ConfigTypeEntry {
                type_hint: type_hint.to_string(),
                version,
                description,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PluginsReport {
        framework_version: FRAMEWORK_VERSION.to_string(),
        plugins: registry.plugins().to_vec(),
        runners: registry.runner_names().into_iter().map(String::from).collect(),
        file_systems: registry
            .file_system_names()
            .into_iter()
            .map(String::from)
            .collect(),
        config_types,
    })
}

/// Run the `terrapipe plugins` command.
///
/// If `--plain` is passed or stdout is not a TTY, disables colors.
pub fn run_plugins(registry: &Registry, json: bool, plain: bool) -> Result<(), TerrapipeError> {
    let report = build_report(registry)?;

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| TerrapipeError::Internal(format!("failed to serialize report: {e}")))?;
        println!("{rendered}");
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        print!("{}", format_report(&report, use_color));
    }
    Ok(())
}

fn format_report(report: &PluginsReport, use_color: bool) -> String {
    use colored::Colorize;
    use std::fmt::Write;

    let heading = |title: &str| {
        if use_color {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    };

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "  terrapipe {}", report.framework_version);
    let _ = writeln!(out, "  {}", "-".repeat(35));

    let _ = writeln!(out, "  {}", heading("Plugins"));
    if report.plugins.is_empty() {
        let _ = writeln!(out, "    (none)");
    }
    for plugin in &report.plugins {
        let _ = writeln!(out, "    {} {}", plugin.name, plugin.version);
    }

    let _ = writeln!(out, "  {}", heading("Runners"));
    for runner in &report.runners {
        let _ = writeln!(out, "    {runner}");
    }

    let _ = writeln!(out, "  {}", heading("Filesystems (lookup order)"));
    for (position, name) in report.file_systems.iter().enumerate() {
        let _ = writeln!(out, "    {}. {name}", position + 1);
    }

    let _ = writeln!(out, "  {}", heading("Config types"));
    for entry in &report.config_types {
        let _ = writeln!(out, "    {} v{}  {}", entry.type_hint, entry.version, entry.description);
    }
    let _ = writeln!(out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrapipe_config::TerrapipeConfig;
    use terrapipe_pytorch_backend::PLUGIN_NAME;

    fn registry() -> Registry {
        terrapipe_registry::bootstrap(&TerrapipeConfig::default()).unwrap()
    }

    #[test]
    fn report_lists_builtins_and_plugin_config() {
        let report = build_report(&registry()).unwrap();

        assert!(report.runners.contains(&"inprocess".to_string()));
        assert_eq!(report.file_systems[..2], ["http".to_string(), "local".to_string()]);
        assert!(report.plugins.iter().any(|p| p.name == PLUGIN_NAME));

        let backend = report
            .config_types
            .iter()
            .find(|c| c.type_hint == "pytorch_chip_classification")
            .unwrap();
        assert_eq!(backend.version, 2);
    }

    #[test]
    fn report_serializes() {
        let report = build_report(&registry()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"framework_version\""));
        assert!(json.contains("\"type_hint\":\"pipeline\""));
    }

    #[test]
    fn plain_report_has_sections() {
        let report = build_report(&registry()).unwrap();
        let text = format_report(&report, false);
        assert!(text.contains("Runners"));
        assert!(text.contains("    1. http"));
        assert!(text.contains("pipeline v1"));
    }
}
