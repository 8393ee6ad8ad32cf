// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PyTorch backend plugin.
//!
//! Registers the `pytorch_chip_classification` backend config with its
//! upgrade chain and the `[pytorch]` section of the global config. Linking
//! this crate into a binary is enough for bootstrap to find it.

mod config;

use std::sync::Arc;

use terrapipe_core::RegistryError;
use terrapipe_registry::{PluginDef, Registry};

pub use config::{
    chip_classification_v0_to_v1, chip_classification_v1_to_v2, CHIP_CLASSIFICATION,
    CHIP_CLASSIFICATION_VERSION, PYTORCH_CHIP_CLASSIFICATION,
};

/// Plugin name, as listed by `terrapipe plugins` and in `plugins.disabled`.
pub const PLUGIN_NAME: &str = "pytorch_backend";

/// Global-config section owned by this plugin.
pub const PYTORCH_SECTION: &str = "pytorch";

/// Fields accepted in the `[pytorch]` section.
pub const PYTORCH_FIELDS: [&str; 2] = ["device", "num_workers"];

/// Registration entry point invoked during bootstrap.
pub fn register_plugin(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.add_config_with_upgraders(
        PYTORCH_CHIP_CLASSIFICATION,
        Arc::new(CHIP_CLASSIFICATION),
        CHIP_CLASSIFICATION_VERSION,
        vec![chip_classification_v0_to_v1, chip_classification_v1_to_v2],
    )?;
    registry.add_rv_config_schema(PYTORCH_SECTION, PYTORCH_FIELDS);
    tracing::debug!(plugin = PLUGIN_NAME, "registered pytorch backend config");
    Ok(())
}

inventory::submit! {
    PluginDef::new(PLUGIN_NAME, env!("CARGO_PKG_VERSION"), register_plugin).requires("0.1.0")
}
