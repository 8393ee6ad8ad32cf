// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! [`validate_config`] checks the framework-owned sections right after
//! loading. [`validate_sections`] runs later, once bootstrap has filled the
//! registry, and checks plugin-owned sections against the registered schema.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::diagnostic::{find_section_offset, locate_key, suggest_key, ConfigError};
use crate::model::TerrapipeConfig;

/// Log levels accepted by `core.log_level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate the framework sections for semantic correctness.
///
/// Collects every failure rather than stopping at the first.
pub fn validate_config(config: &TerrapipeConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.core.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "core.log_level `{}` is not one of: {}",
                config.core.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if let Some(tmp_dir) = &config.core.tmp_dir
        && tmp_dir.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "core.tmp_dir must not be empty when set".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for (i, name) in config.plugins.disabled.iter().enumerate() {
        if name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("plugins.disabled[{i}] must not be empty"),
            });
        } else if !seen.insert(name) {
            errors.push(ConfigError::Validation {
                message: format!("plugin `{name}` is listed twice in plugins.disabled"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate plugin-owned sections against registered schema sections.
///
/// `schema` maps section name to recognized field names. `toml_sources`
/// are `(path, content)` pairs used to attach source spans; pass an empty
/// slice when the config did not come from files.
pub fn validate_sections(
    config: &TerrapipeConfig,
    schema: &BTreeMap<String, BTreeSet<String>>,
    toml_sources: &[(String, String)],
) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let section_names: Vec<&str> = schema.keys().map(String::as_str).collect();

    for (name, value) in &config.sections {
        let Some(fields) = schema.get(name) else {
            let (span, src) = locate_section(toml_sources, name);
            errors.push(ConfigError::UnknownSection {
                section: name.clone(),
                suggestion: suggest_key(name, &section_names),
                valid_sections: section_names.join(", "),
                span,
                src,
            });
            continue;
        };

        let Some(table) = value.as_table() else {
            errors.push(ConfigError::InvalidType {
                key: name.clone(),
                detail: format!("found {}, expected a table", value.type_str()),
                expected: format!("a `[{name}]` table"),
                span: None,
                src: None,
            });
            continue;
        };

        let field_names: Vec<&str> = fields.iter().map(String::as_str).collect();
        for key in table.keys() {
            if fields.contains(key) {
                continue;
            }
            let (span, src) = locate_key(toml_sources, std::slice::from_ref(name), key);
            errors.push(ConfigError::UnknownKey {
                key: format!("{name}.{key}"),
                suggestion: suggest_key(key, &field_names),
                valid_keys: field_names.join(", "),
                span,
                src,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn locate_section(
    toml_sources: &[(String, String)],
    section: &str,
) -> (Option<miette::SourceSpan>, Option<miette::NamedSource<String>>) {
    toml_sources
        .iter()
        .find_map(|(path, content)| {
            find_section_offset(content, section).map(|offset| {
                (
                    Some(miette::SourceSpan::new(offset.into(), section.len())),
                    Some(miette::NamedSource::new(path, content.clone())),
                )
            })
        })
        .unwrap_or((None, None))
}
