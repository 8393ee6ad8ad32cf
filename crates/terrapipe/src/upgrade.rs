// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `terrapipe upgrade` command implementation.

use std::path::Path;

use serde_json::Value;
use terrapipe_core::TerrapipeError;
use terrapipe_registry::{upgrade_config, Registry};
use tracing::info;

/// Read a JSON config file and upgrade every typed object in it.
pub fn upgrade_file(registry: &Registry, path: &Path) -> Result<Value, TerrapipeError> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|e| TerrapipeError::Config(format!("{}: invalid JSON: {e}", path.display())))?;
    upgrade_config(registry, value)
}

/// Run the `terrapipe upgrade` command.
///
/// Prints the upgraded config, or writes it to `output` when given.
pub fn run_upgrade(
    registry: &Registry,
    path: &Path,
    output: Option<&Path>,
) -> Result<(), TerrapipeError> {
    let upgraded = upgrade_file(registry, path)?;
    let rendered = serde_json::to_string_pretty(&upgraded)
        .map_err(|e| TerrapipeError::Internal(format!("failed to serialize config: {e}")))?;

    match output {
        Some(output) => {
            std::fs::write(output, format!("{rendered}\n"))?;
            info!(input = %path.display(), output = %output.display(), "config upgraded");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use terrapipe_config::TerrapipeConfig;

    fn registry() -> Registry {
        terrapipe_registry::bootstrap(&TerrapipeConfig::default()).unwrap()
    }

    #[test]
    fn upgrades_file_to_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("pipeline.json");
        let output = dir.path().join("pipeline-v1.json");
        std::fs::write(
            &input,
            json!({"type_hint": "pipeline", "output_uri": "s3://bucket/out"}).to_string(),
        )
        .unwrap();

        run_upgrade(&registry(), &input, Some(&output)).unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            written,
            json!({"type_hint": "pipeline", "root_uri": "s3://bucket/out", "version": 1})
        );
    }

    #[test]
    fn invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.json");
        std::fs::write(&input, "{not json").unwrap();

        let err = upgrade_file(&registry(), &input).unwrap_err();
        assert!(matches!(err, TerrapipeError::Config(ref m) if m.contains("invalid JSON")));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = upgrade_file(&registry(), &dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, TerrapipeError::Io(_)));
    }
}
