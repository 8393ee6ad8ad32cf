// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `terrapipe config` command implementation.

use std::collections::{BTreeMap, BTreeSet};
use std::io::IsTerminal;

use terrapipe_config::TerrapipeConfig;
use terrapipe_core::TerrapipeError;
use terrapipe_registry::Registry;

/// Run the `terrapipe config` command.
///
/// Sections were already validated against the registry schema at startup,
/// so this only reports.
pub fn run_config(
    registry: &Registry,
    config: &TerrapipeConfig,
    plain: bool,
) -> Result<(), TerrapipeError> {
    let use_color = !plain && std::io::stdout().is_terminal();
    print!(
        "{}",
        format_schema(registry.get_rv_config_schema(), config, use_color)
    );
    Ok(())
}

fn is_configured(config: &TerrapipeConfig, section: &str) -> bool {
    matches!(section, "core" | "plugins") || config.section(section).is_some()
}

fn format_schema(
    schema: &BTreeMap<String, BTreeSet<String>>,
    config: &TerrapipeConfig,
    use_color: bool,
) -> String {
    use colored::Colorize;
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "  terrapipe config");
    let _ = writeln!(out, "  {}", "-".repeat(35));
    let _ = writeln!(out, "    log_level: {}", config.core.log_level);
    let _ = writeln!(
        out,
        "    tmp_dir:   {}",
        config.core.tmp_dir.as_deref().unwrap_or("(system default)")
    );
    if !config.plugins.disabled.is_empty() {
        let _ = writeln!(out, "    disabled:  {}", config.plugins.disabled.join(", "));
    }
    let _ = writeln!(out);

    for (section, fields) in schema {
        let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
        let marker = match (is_configured(config, section), use_color) {
            (true, true) => "✓".green().to_string(),
            (true, false) => "[set]".to_string(),
            (false, true) => "-".dimmed().to_string(),
            (false, false) => "[   ]".to_string(),
        };
        let _ = writeln!(out, "  {marker} [{section}]  {}", fields.join(", "));
    }
    let _ = writeln!(out);
    out
}
