// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Terrapipe pipeline framework.
//!
//! This crate defines the contracts every registrable resource implements
//! (runners, filesystems, config types) together with the error types shared
//! by the registry, the configuration system, and plugins.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{RegistryError, TerrapipeError};
pub use types::{FileMode, ResourceKind, Split};

pub use traits::{ConfigType, ConfigUpgrader, FieldSchema, FileSystem, Pipeline, RunRequest, Runner};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrapipe_error_has_all_variants() {
        let _registry = TerrapipeError::Registry(RegistryError::NotFound {
            kind: ResourceKind::Runner,
            key: "test".into(),
        });
        let _config = TerrapipeError::Config("test".into());
        let _plugin = TerrapipeError::Plugin {
            name: "test".into(),
            message: "test".into(),
        };
        let _registration = TerrapipeError::PluginRegistration {
            name: "test".into(),
            source: RegistryError::Conflict {
                kind: ResourceKind::Runner,
                key: "test".into(),
            },
        };
        let _upgrade = TerrapipeError::Upgrade {
            type_hint: "test".into(),
            message: "test".into(),
        };
        let _runner = TerrapipeError::Runner {
            message: "test".into(),
            source: None,
        };
        let _io = TerrapipeError::Io(std::io::Error::other("test"));
        let _internal = TerrapipeError::Internal("test".into());
    }

    #[test]
    fn registry_error_converts_into_terrapipe_error() {
        fn lookup() -> Result<(), TerrapipeError> {
            Err(RegistryError::NotFound {
                kind: ResourceKind::Config,
                key: "missing".into(),
            })?;
            Ok(())
        }

        let err = lookup().unwrap_err();
        assert!(matches!(err, TerrapipeError::Registry(ref e) if e.is_not_found()));
        assert_eq!(err.to_string(), "missing is not a registered config type hint");
    }

    #[test]
    fn all_trait_modules_are_exported() {
        fn _assert_runner<T: Runner>() {}
        fn _assert_file_system<T: FileSystem>() {}
        fn _assert_config_type<T: ConfigType>() {}
        fn _assert_pipeline<T: Pipeline>() {}
    }
}
