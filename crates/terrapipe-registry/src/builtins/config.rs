// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config types and global-config schema sections owned by the framework.

use std::sync::Arc;

use serde_json::Value;
use terrapipe_config::model::{CORE_FIELDS, PLUGINS_FIELDS};
use terrapipe_core::{FieldSchema, RegistryError, TerrapipeError};

use crate::registry::Registry;

/// Type hint of the base pipeline config.
pub const PIPELINE: &str = "pipeline";

const PIPELINE_SCHEMA: FieldSchema = FieldSchema::new(
    PIPELINE,
    "Base pipeline config: root output location",
    &["root_uri"],
);

/// Version 0 pipelines named their output location `output_uri`.
fn pipeline_v0_to_v1(mut value: Value) -> Result<Value, TerrapipeError> {
    if let Some(object) = value.as_object_mut()
        && let Some(uri) = object.remove("output_uri")
    {
        object.entry("root_uri").or_insert(uri);
    }
    Ok(value)
}

/// Register the framework's own config types.
pub fn register_builtin_configs(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.add_config_with_upgraders(
        PIPELINE,
        Arc::new(PIPELINE_SCHEMA),
        1,
        vec![pipeline_v0_to_v1],
    )
}

/// Register the schema of the framework-owned global config sections.
pub fn register_builtin_schema(registry: &mut Registry) {
    registry.add_rv_config_schema("core", CORE_FIELDS.iter().copied());
    registry.add_rv_config_schema("plugins", PLUGINS_FIELDS.iter().copied());
}
