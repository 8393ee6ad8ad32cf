// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-phase registry startup: built-ins first, then plugins.
//!
//! Any failure aborts startup. There is no mode that continues with a
//! partial plugin set.

use std::collections::HashSet;

use terrapipe_config::TerrapipeConfig;
use terrapipe_core::{RegistryError, TerrapipeError};
use tracing::{debug, info};

use crate::builtins;
use crate::plugin::{discovered_plugins, LoadedPlugin, PluginDef};
use crate::registry::Registry;

/// Version of the framework that plugins are checked against.
pub const FRAMEWORK_VERSION: &str = env!("CARGO_PKG_VERSION");

impl Registry {
    /// Register the framework's built-in runners, filesystems, config types,
    /// and global-config schema sections.
    pub fn load_builtins(&mut self) -> Result<(), RegistryError> {
        builtins::register_builtins(self)
    }

    /// Invoke each plugin's registration entry point with this registry.
    ///
    /// Plugins are version-checked before registration. A plugin name seen
    /// twice in one call, or already loaded, is an error.
    pub fn load_plugins<'a, I>(&mut self, plugins: I) -> Result<(), TerrapipeError>
    where
        I: IntoIterator<Item = &'a PluginDef>,
    {
        let framework_version = semver::Version::parse(FRAMEWORK_VERSION)
            .map_err(|e| TerrapipeError::Internal(format!("invalid framework version: {e}")))?;

        let mut seen: HashSet<String> = self.plugins.iter().map(|p| p.name.clone()).collect();

        for plugin in plugins {
            if !seen.insert(plugin.name.to_string()) {
                return Err(TerrapipeError::Plugin {
                    name: plugin.name.to_string(),
                    message: "a plugin with this name is already loaded".to_string(),
                });
            }

            let version = plugin.check_compatibility(&framework_version)?;
            (plugin.register)(self).map_err(|source| TerrapipeError::PluginRegistration {
                name: plugin.name.to_string(),
                source,
            })?;

            debug!(plugin = plugin.name, %version, "plugin registered");
            self.plugins.push(LoadedPlugin {
                name: plugin.name.to_string(),
                version: version.to_string(),
            });
        }

        Ok(())
    }
}

/// Build a registry from built-ins and every discovered plugin not disabled
/// in `config`.
pub fn bootstrap(config: &TerrapipeConfig) -> Result<Registry, TerrapipeError> {
    bootstrap_with(config, discovered_plugins())
}

/// Build a registry from built-ins and an explicit plugin list.
pub fn bootstrap_with<'a, I>(config: &TerrapipeConfig, plugins: I) -> Result<Registry, TerrapipeError>
where
    I: IntoIterator<Item = &'a PluginDef>,
{
    let mut registry = Registry::new();
    registry.load_builtins()?;

    let (enabled, skipped): (Vec<&PluginDef>, Vec<&PluginDef>) = plugins
        .into_iter()
        .partition(|plugin| !config.is_plugin_disabled(plugin.name));
    for plugin in &skipped {
        info!(plugin = plugin.name, "plugin disabled by configuration");
    }

    registry.load_plugins(enabled)?;

    info!(
        runners = registry.runner_names().len(),
        file_systems = registry.file_system_names().len(),
        configs = registry.config_type_hints().len(),
        plugins = registry.plugins().len(),
        "registry bootstrapped"
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use terrapipe_core::FileMode;
    use terrapipe_test_utils::MockRunner;

    fn register_custom(registry: &mut Registry) -> Result<(), RegistryError> {
        registry.add_runner("custom", Arc::new(MockRunner::new("custom")))
    }

    fn register_conflicting(registry: &mut Registry) -> Result<(), RegistryError> {
        registry.add_runner("inprocess", Arc::new(MockRunner::new("shadow")))
    }

    static CUSTOM: PluginDef = PluginDef::new("custom", "0.1.0", register_custom);
    static CONFLICTING: PluginDef = PluginDef::new("conflicting", "0.1.0", register_conflicting);
    static TOO_NEW: PluginDef =
        PluginDef::new("too_new", "0.1.0", register_custom).requires("999.0.0");

    #[test]
    fn builtins_resolve_without_plugins() {
        let registry = bootstrap_with(&TerrapipeConfig::default(), std::iter::empty()).unwrap();

        assert_eq!(registry.get_runner("inprocess").unwrap().name(), "inprocess");
        assert_eq!(
            registry
                .get_file_system("http://example.com/scene.tif", FileMode::Read)
                .unwrap()
                .name(),
            "http"
        );
        assert_eq!(
            registry
                .get_file_system("/data/scene.tif", FileMode::Write)
                .unwrap()
                .name(),
            "local"
        );
        assert_eq!(registry.get_config_upgraders("pipeline").unwrap().version(), 1);
        assert!(registry.plugins().is_empty());
    }

    #[test]
    fn plugin_runner_is_added_alongside_builtins() {
        let registry = bootstrap_with(&TerrapipeConfig::default(), [&CUSTOM]).unwrap();

        assert_eq!(registry.get_runner("custom").unwrap().name(), "custom");
        assert_eq!(registry.get_runner("inprocess").unwrap().name(), "inprocess");
        assert_eq!(
            registry.plugins(),
            &[LoadedPlugin {
                name: "custom".to_string(),
                version: "0.1.0".to_string()
            }]
        );
    }

    #[test]
    fn conflicting_plugin_aborts_bootstrap() {
        let err = bootstrap_with(&TerrapipeConfig::default(), [&CONFLICTING]).unwrap_err();
        match err {
            TerrapipeError::PluginRegistration { name, source } => {
                assert_eq!(name, "conflicting");
                assert!(source.is_conflict());
            }
            other => panic!("expected PluginRegistration, got {other:?}"),
        }
    }

    #[test]
    fn incompatible_plugin_aborts_bootstrap() {
        let err = bootstrap_with(&TerrapipeConfig::default(), [&TOO_NEW]).unwrap_err();
        assert!(matches!(err, TerrapipeError::Plugin { ref name, .. } if name == "too_new"));
    }

    #[test]
    fn duplicate_plugin_name_is_rejected() {
        let mut registry = Registry::new();
        let err = registry.load_plugins([&CUSTOM, &CUSTOM]).unwrap_err();
        assert!(err.to_string().contains("already loaded"));
        assert_eq!(registry.plugins().len(), 1);
    }

    #[test]
    fn disabled_plugins_are_skipped() {
        let mut config = TerrapipeConfig::default();
        config.plugins.disabled = vec!["custom".to_string()];

        let registry = bootstrap_with(&config, [&CUSTOM]).unwrap();
        assert!(registry.get_runner("custom").is_err());
        assert!(registry.plugins().is_empty());
    }
}
