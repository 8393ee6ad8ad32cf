// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource tables for runners, filesystems, config types, and the
//! global-config schema.
//!
//! The `Registry` is built once by the process entry point, filled during
//! bootstrap, and then shared read-only (usually behind an `Arc`). All
//! mutation goes through `&mut self`, so late registration needs exclusive
//! access by construction.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use terrapipe_core::{
    ConfigType, ConfigUpgrader, FileMode, FileSystem, RegistryError, ResourceKind, Runner,
};

use crate::plugin::LoadedPlugin;
use crate::upgrade::UpgradeChain;

/// Registry of built-in and plugin-contributed resources.
pub struct Registry {
    runners: HashMap<String, Arc<dyn Runner>>,
    file_systems: Vec<Arc<dyn FileSystem>>,
    configs: HashMap<String, Arc<dyn ConfigType>>,
    config_upgraders: HashMap<String, UpgradeChain>,
    rv_config_schema: BTreeMap<String, BTreeSet<String>>,
    pub(crate) plugins: Vec<LoadedPlugin>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            runners: HashMap::new(),
            file_systems: Vec::new(),
            configs: HashMap::new(),
            config_upgraders: HashMap::new(),
            rv_config_schema: BTreeMap::new(),
            plugins: Vec::new(),
        }
    }

    /// Register a runner under the name passed on the command line.
    pub fn add_runner(
        &mut self,
        name: impl Into<String>,
        runner: Arc<dyn Runner>,
    ) -> Result<(), RegistryError> {
        match self.runners.entry(name.into()) {
            Entry::Occupied(entry) => Err(RegistryError::Conflict {
                kind: ResourceKind::Runner,
                key: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(runner);
                Ok(())
            }
        }
    }

    /// Look up a runner by name.
    pub fn get_runner(&self, name: &str) -> Result<Arc<dyn Runner>, RegistryError> {
        self.runners
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                kind: ResourceKind::Runner,
                key: name.to_string(),
            })
    }

    /// Append a filesystem. Earlier registrations take priority on lookup.
    pub fn add_file_system(&mut self, file_system: Arc<dyn FileSystem>) {
        self.file_systems.push(file_system);
    }

    /// Return the first registered filesystem that accepts `uri` in `mode`.
    pub fn get_file_system(
        &self,
        uri: &str,
        mode: FileMode,
    ) -> Result<Arc<dyn FileSystem>, RegistryError> {
        self.file_systems
            .iter()
            .find(|fs| fs.matches_uri(uri, mode))
            .cloned()
            .ok_or_else(|| RegistryError::no_file_system(uri, mode))
    }

    /// Register a config type with no upgrades (current version 0).
    pub fn add_config(
        &mut self,
        type_hint: impl Into<String>,
        config: Arc<dyn ConfigType>,
    ) -> Result<(), RegistryError> {
        self.add_config_with_upgraders(type_hint, config, 0, Vec::new())
    }

    /// Register a config type together with its upgrade chain.
    ///
    /// `type_hint` must equal `config.type_hint()`. `upgraders[i]` moves a
    /// serialized config from version `i` to `i + 1`, so exactly `version`
    /// upgraders are required. Both tables are checked before either is written.
    pub fn add_config_with_upgraders(
        &mut self,
        type_hint: impl Into<String>,
        config: Arc<dyn ConfigType>,
        version: u32,
        upgraders: Vec<ConfigUpgrader>,
    ) -> Result<(), RegistryError> {
        let type_hint = type_hint.into();

        if config.type_hint() != type_hint {
            return Err(RegistryError::TypeHintMismatch {
                key: type_hint,
                type_hint: config.type_hint().to_string(),
            });
        }
        if self.configs.contains_key(&type_hint) {
            return Err(RegistryError::Conflict {
                kind: ResourceKind::Config,
                key: type_hint,
            });
        }
        if self.config_upgraders.contains_key(&type_hint) {
            return Err(RegistryError::Conflict {
                kind: ResourceKind::ConfigUpgraders,
                key: type_hint,
            });
        }
        if upgraders.len() != version as usize {
            return Err(RegistryError::InvalidUpgradeChain {
                type_hint,
                version,
                len: upgraders.len(),
            });
        }

        self.config_upgraders
            .insert(type_hint.clone(), UpgradeChain::new(version, upgraders));
        self.configs.insert(type_hint, config);
        Ok(())
    }

    /// Look up a config type by type hint.
    pub fn get_config(&self, type_hint: &str) -> Result<Arc<dyn ConfigType>, RegistryError> {
        self.configs
            .get(type_hint)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                kind: ResourceKind::Config,
                key: type_hint.to_string(),
            })
    }

    /// Look up the current version and upgrade chain for a type hint.
    ///
    /// A config registered without upgraders yields an empty version-0 chain.
    pub fn get_config_upgraders(&self, type_hint: &str) -> Result<&UpgradeChain, RegistryError> {
        self.config_upgraders
            .get(type_hint)
            .ok_or_else(|| RegistryError::NotFound {
                kind: ResourceKind::ConfigUpgraders,
                key: type_hint.to_string(),
            })
    }

    /// Set the recognized fields of a global-config section, replacing any
    /// previous registration for that section.
    pub fn add_rv_config_schema<I, S>(&mut self, section: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rv_config_schema
            .insert(section.into(), fields.into_iter().map(Into::into).collect());
    }

    /// The full global-config schema, section name to field names.
    pub fn get_rv_config_schema(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.rv_config_schema
    }

    /// Registered runner names, sorted.
    pub fn runner_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.runners.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered filesystem names in priority order.
    pub fn file_system_names(&self) -> Vec<&str> {
        self.file_systems.iter().map(|fs| fs.name()).collect()
    }

    /// Registered config type hints, sorted.
    pub fn config_type_hints(&self) -> Vec<&str> {
        let mut hints: Vec<&str> = self.configs.keys().map(String::as_str).collect();
        hints.sort_unstable();
        hints
    }

    /// Plugins loaded so far, in load order.
    pub fn plugins(&self) -> &[LoadedPlugin] {
        &self.plugins
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("runners", &self.runner_names())
            .field("file_systems", &self.file_system_names())
            .field("configs", &self.config_type_hints())
            .field("rv_config_schema", &self.rv_config_schema)
            .field("plugins", &self.plugins)
            .finish()
    }
}
