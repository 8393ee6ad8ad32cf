// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `pytorch_chip_classification` backend config and its upgraders.

use serde_json::{Map, Value};
use terrapipe_core::{FieldSchema, TerrapipeError};

pub const PYTORCH_CHIP_CLASSIFICATION: &str = "pytorch_chip_classification";

/// Current serialized version.
pub const CHIP_CLASSIFICATION_VERSION: u32 = 2;

pub const CHIP_CLASSIFICATION: FieldSchema = FieldSchema::new(
    PYTORCH_CHIP_CLASSIFICATION,
    "PyTorch chip classification backend: model and solver settings",
    &["model", "solver"],
);

/// Solver settings that lived at the top level before version 1.
const SOLVER_KEYS: [&str; 3] = ["lr", "num_epochs", "batch_sz"];

fn as_object<'a>(
    value: &'a mut Value,
    step: &str,
) -> Result<&'a mut Map<String, Value>, TerrapipeError> {
    value.as_object_mut().ok_or_else(|| TerrapipeError::Upgrade {
        type_hint: PYTORCH_CHIP_CLASSIFICATION.to_string(),
        message: format!("{step}: expected an object"),
    })
}

/// v1 grouped the top-level solver settings under `solver`.
pub fn chip_classification_v0_to_v1(mut value: Value) -> Result<Value, TerrapipeError> {
    let object = as_object(&mut value, "v0 to v1")?;

    let mut solver = match object.remove("solver") {
        Some(Value::Object(solver)) => solver,
        Some(other) => {
            return Err(TerrapipeError::Upgrade {
                type_hint: PYTORCH_CHIP_CLASSIFICATION.to_string(),
                message: format!("v0 to v1: `solver` must be an object, got {other}"),
            });
        }
        None => Map::new(),
    };
    for key in SOLVER_KEYS {
        if let Some(setting) = object.remove(key) {
            solver.entry(key).or_insert(setting);
        }
    }
    object.insert("solver".to_string(), Value::Object(solver));
    Ok(value)
}

/// v2 renamed `model.backbone_name` to `model.backbone`.
pub fn chip_classification_v1_to_v2(mut value: Value) -> Result<Value, TerrapipeError> {
    let object = as_object(&mut value, "v1 to v2")?;
    if let Some(Value::Object(model)) = object.get_mut("model")
        && let Some(backbone) = model.remove("backbone_name")
    {
        model.entry("backbone").or_insert(backbone);
    }
    Ok(value)
}
