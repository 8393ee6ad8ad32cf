// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Versioned config upgrade chains.
//!
//! Every registered config type has a current version `V` and exactly `V`
//! upgraders; upgrader `i` moves a serialized config from version `i` to
//! `i + 1`. [`upgrade_config`] walks a serialized config tree and brings every
//! typed object up to its current version.

use serde_json::{Map, Value};
use terrapipe_core::{ConfigUpgrader, TerrapipeError};
use tracing::debug;

use crate::registry::Registry;

/// Key naming the registered config type of a serialized object.
pub const TYPE_HINT_KEY: &str = "type_hint";

/// Key holding the version a serialized object was written at.
pub const VERSION_KEY: &str = "version";

/// The current version of a config type and the upgraders leading to it.
#[derive(Clone)]
pub struct UpgradeChain {
    version: u32,
    upgraders: Vec<ConfigUpgrader>,
}

impl UpgradeChain {
    /// The registry checks `upgraders.len() == version` before constructing.
    pub(crate) fn new(version: u32, upgraders: Vec<ConfigUpgrader>) -> Self {
        Self { version, upgraders }
    }

    /// The current version of the config type.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Upgraders in source-version order.
    pub fn upgraders(&self) -> &[ConfigUpgrader] {
        &self.upgraders
    }

    /// Apply upgraders `from..version` in order, feeding each output into the next.
    pub fn apply(&self, type_hint: &str, value: Value, from: u32) -> Result<Value, TerrapipeError> {
        if from > self.version {
            return Err(TerrapipeError::Upgrade {
                type_hint: type_hint.to_string(),
                message: format!(
                    "serialized version {from} is newer than current version {}",
                    self.version
                ),
            });
        }

        self.upgraders[from as usize..]
            .iter()
            .enumerate()
            .try_fold(value, |value, (offset, upgrade)| {
                let step = from as usize + offset;
                debug!(type_hint, from = step, to = step + 1, "applying config upgrader");
                upgrade(value)
            })
    }
}

impl std::fmt::Debug for UpgradeChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpgradeChain")
            .field("version", &self.version)
            .field("upgraders", &self.upgraders.len())
            .finish()
    }
}

/// Upgrade every typed object in a serialized config to its current version.
///
/// Nested objects are upgraded before the object containing them. Each
/// upgraded object has its `version` key set to the current version and is
/// validated by its registered config type.
pub fn upgrade_config(registry: &Registry, value: Value) -> Result<Value, TerrapipeError> {
    match value {
        Value::Object(map) => {
            let children = map
                .into_iter()
                .map(|(key, child)| Ok((key, upgrade_config(registry, child)?)))
                .collect::<Result<Map<String, Value>, TerrapipeError>>()?;

            match children.get(TYPE_HINT_KEY).and_then(Value::as_str) {
                Some(type_hint) => {
                    let type_hint = type_hint.to_string();
                    upgrade_object(registry, &type_hint, children)
                }
                None => Ok(Value::Object(children)),
            }
        }
        Value::Array(items) => items
            .into_iter()
            .map(|item| upgrade_config(registry, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Ok(other),
    }
}

fn upgrade_object(
    registry: &Registry,
    type_hint: &str,
    object: Map<String, Value>,
) -> Result<Value, TerrapipeError> {
    let config = registry.get_config(type_hint)?;
    let chain = registry.get_config_upgraders(type_hint)?;
    let from = serialized_version(type_hint, &object)?;

    let upgraded = chain.apply(type_hint, Value::Object(object), from)?;
    let Value::Object(mut upgraded) = upgraded else {
        return Err(TerrapipeError::Upgrade {
            type_hint: type_hint.to_string(),
            message: "upgrader returned a non-object value".to_string(),
        });
    };
    upgraded.insert(VERSION_KEY.to_string(), Value::from(chain.version()));

    let upgraded = Value::Object(upgraded);
    config.validate(&upgraded)?;
    Ok(upgraded)
}

/// Version embedded in a serialized object; absent means version 0.
fn serialized_version(type_hint: &str, object: &Map<String, Value>) -> Result<u32, TerrapipeError> {
    match object.get(VERSION_KEY) {
        None => Ok(0),
        Some(v) => v
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| TerrapipeError::Upgrade {
                type_hint: type_hint.to_string(),
                message: format!("`{VERSION_KEY}` must be a non-negative integer, got {v}"),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use terrapipe_core::FieldSchema;

    const SCENE: FieldSchema = FieldSchema::new("scene", "A scene", &["id", "raster_uris"]);
    const LABEL: FieldSchema = FieldSchema::new("label_source", "Labels", &["uri"]);

    fn scene_v0_to_v1(mut value: Value) -> Result<Value, TerrapipeError> {
        if let Some(obj) = value.as_object_mut()
            && let Some(name) = obj.remove("name")
        {
            obj.insert("id".to_string(), name);
        }
        Ok(value)
    }

    fn scene_v1_to_v2(mut value: Value) -> Result<Value, TerrapipeError> {
        if let Some(obj) = value.as_object_mut()
            && let Some(uri) = obj.remove("raster_uri")
        {
            obj.insert("raster_uris".to_string(), json!([uri]));
        }
        Ok(value)
    }

    fn failing_upgrade(_value: Value) -> Result<Value, TerrapipeError> {
        Err(TerrapipeError::Internal("boom".to_string()))
    }

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .add_config_with_upgraders(
                "scene",
                Arc::new(SCENE),
                2,
                vec![scene_v0_to_v1, scene_v1_to_v2],
            )
            .unwrap();
        registry.add_config("label_source", Arc::new(LABEL)).unwrap();
        registry
    }

    #[test]
    fn v0_object_is_upgraded_to_current() {
        let registry = registry();
        let v0 = json!({"type_hint": "scene", "name": "s1", "raster_uri": "a.tif"});

        let upgraded = upgrade_config(&registry, v0).unwrap();
        assert_eq!(
            upgraded,
            json!({"type_hint": "scene", "id": "s1", "raster_uris": ["a.tif"], "version": 2})
        );
    }

    #[test]
    fn partial_chain_applies_only_remaining_steps() {
        let registry = registry();
        let v1 = json!({"type_hint": "scene", "version": 1, "id": "s1", "raster_uri": "b.tif"});

        let upgraded = upgrade_config(&registry, v1).unwrap();
        assert_eq!(upgraded["raster_uris"], json!(["b.tif"]));
        assert_eq!(upgraded["version"], json!(2));
    }

    #[test]
    fn nested_objects_and_arrays_are_upgraded() {
        let registry = registry();
        let value = json!({
            "scenes": [
                {"type_hint": "scene", "name": "a", "raster_uri": "a.tif",
                 "label": {"type_hint": "label_source", "uri": "a.geojson"}},
                {"type_hint": "scene", "version": 2, "id": "b", "raster_uris": []}
            ]
        });

        let upgraded = upgrade_config(&registry, value).unwrap();
        assert_eq!(upgraded["scenes"][0]["id"], json!("a"));
        assert_eq!(upgraded["scenes"][0]["label"]["version"], json!(0));
        assert_eq!(upgraded["scenes"][1]["id"], json!("b"));
    }

    #[test]
    fn newer_version_is_rejected() {
        let registry = registry();
        let err = upgrade_config(&registry, json!({"type_hint": "scene", "version": 3})).unwrap_err();
        assert!(err.to_string().contains("newer than current version 2"));
    }

    #[test]
    fn bad_version_value_is_rejected() {
        let registry = registry();
        let err =
            upgrade_config(&registry, json!({"type_hint": "scene", "version": "one"})).unwrap_err();
        assert!(matches!(err, TerrapipeError::Upgrade { .. }));
    }

    #[test]
    fn unknown_type_hint_is_not_found() {
        let registry = registry();
        let err = upgrade_config(&registry, json!({"type_hint": "mystery"})).unwrap_err();
        assert!(matches!(err, TerrapipeError::Registry(ref e) if e.is_not_found()));
        assert_eq!(err.to_string(), "mystery is not a registered config type hint");
    }

    #[test]
    fn upgraded_object_is_validated() {
        let registry = registry();
        let err = upgrade_config(&registry, json!({"type_hint": "scene", "name": "s1"})).unwrap_err();
        assert!(err.to_string().contains("raster_uris"));
    }

    #[test]
    fn upgrader_errors_propagate() {
        let chain = UpgradeChain::new(1, vec![failing_upgrade]);
        assert!(chain.apply("x", json!({}), 0).is_err());
        assert_eq!(chain.apply("x", json!({"a": 1}), 1).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn untyped_values_pass_through() {
        let registry = Registry::new();
        let value = json!({"a": [1, 2, {"b": null}]});
        assert_eq!(upgrade_config(&registry, value.clone()).unwrap(), value);
    }
}
