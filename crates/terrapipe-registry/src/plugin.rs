// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptors and link-time discovery.
//!
//! A plugin crate submits a [`PluginDef`] with `inventory::submit!`. Every
//! descriptor linked into the final binary is returned by
//! [`discovered_plugins`], which is how bootstrap finds plugins without the
//! framework naming them.
//!
//! ```ignore
//! inventory::submit! {
//!     PluginDef::new("my_plugin", env!("CARGO_PKG_VERSION"), register_plugin)
//! }
//! ```

use serde::Serialize;
use terrapipe_core::{RegistryError, TerrapipeError};

use crate::registry::Registry;

/// Registration entry point called once per plugin during bootstrap.
pub type RegisterFn = fn(&mut Registry) -> Result<(), RegistryError>;

/// Static descriptor a plugin submits for discovery.
pub struct PluginDef {
    /// Unique plugin name, also used in `plugins.disabled`.
    pub name: &'static str,
    /// Semantic version of the plugin.
    pub version: &'static str,
    /// Oldest framework version the plugin works with.
    pub min_framework_version: Option<&'static str>,
    /// Called with the registry so the plugin can add its resources.
    pub register: RegisterFn,
}

inventory::collect!(PluginDef);

impl PluginDef {
    pub const fn new(name: &'static str, version: &'static str, register: RegisterFn) -> Self {
        Self {
            name,
            version,
            min_framework_version: None,
            register,
        }
    }

    /// Declare the oldest framework version this plugin supports.
    pub const fn requires(self, min_framework_version: &'static str) -> Self {
        Self {
            min_framework_version: Some(min_framework_version),
            ..self
        }
    }

    /// Parse the plugin version and check it against `framework_version`.
    pub fn check_compatibility(
        &self,
        framework_version: &semver::Version,
    ) -> Result<semver::Version, TerrapipeError> {
        let version = semver::Version::parse(self.version).map_err(|e| TerrapipeError::Plugin {
            name: self.name.to_string(),
            message: format!("invalid version `{}`: {e}", self.version),
        })?;

        if let Some(min) = self.min_framework_version {
            let min = semver::Version::parse(min).map_err(|e| TerrapipeError::Plugin {
                name: self.name.to_string(),
                message: format!("invalid minimum framework version `{min}`: {e}"),
            })?;
            if *framework_version < min {
                return Err(TerrapipeError::Plugin {
                    name: self.name.to_string(),
                    message: format!("requires framework {min} or newer, running {framework_version}"),
                });
            }
        }

        Ok(version)
    }
}

impl std::fmt::Debug for PluginDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginDef")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("min_framework_version", &self.min_framework_version)
            .finish_non_exhaustive()
    }
}

/// Every plugin descriptor linked into this binary, in unspecified order.
pub fn discovered_plugins() -> impl Iterator<Item = &'static PluginDef> {
    inventory::iter::<PluginDef>.into_iter()
}

/// A plugin whose registration entry point completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedPlugin {
    pub name: String,
    pub version: String,
}
