// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Versioned config type contract.
//!
//! Serialized configs are JSON objects that embed a `type_hint` naming the
//! registered config type and a `version` number. Older versions are moved
//! forward by a chain of [`ConfigUpgrader`] functions, one per version step.

use serde_json::Value;

use crate::error::TerrapipeError;

/// Transforms a serialized config from version `i` to version `i + 1`.
pub type ConfigUpgrader = fn(Value) -> Result<Value, TerrapipeError>;

/// A configuration schema identified by a stable type hint.
pub trait ConfigType: Send + Sync + 'static {
    /// The `type_hint` serialized instances of this type carry.
    fn type_hint(&self) -> &str;

    /// Human-readable summary shown in listings.
    fn description(&self) -> &str {
        ""
    }

    /// Checks that `value` has the shape of the current version.
    fn validate(&self, value: &Value) -> Result<(), TerrapipeError>;
}

/// A config type described by the fields its current version must carry.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    type_hint: &'static str,
    description: &'static str,
    required: &'static [&'static str],
}

impl FieldSchema {
    pub const fn new(
        type_hint: &'static str,
        description: &'static str,
        required: &'static [&'static str],
    ) -> Self {
        Self {
            type_hint,
            description,
            required,
        }
    }

    pub fn required_fields(&self) -> &[&'static str] {
        self.required
    }
}

impl ConfigType for FieldSchema {
    fn type_hint(&self) -> &str {
        self.type_hint
    }

    fn description(&self) -> &str {
        self.description
    }

    fn validate(&self, value: &Value) -> Result<(), TerrapipeError> {
        let object = value.as_object().ok_or_else(|| TerrapipeError::Upgrade {
            type_hint: self.type_hint.to_string(),
            message: "serialized config must be a JSON object".to_string(),
        })?;

        let missing: Vec<&str> = self
            .required
            .iter()
            .copied()
            .filter(|field| !object.contains_key(*field))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(TerrapipeError::Upgrade {
                type_hint: self.type_hint.to_string(),
                message: format!("missing required fields: {}", missing.join(", ")),
            })
        }
    }
}
