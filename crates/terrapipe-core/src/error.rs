// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Terrapipe registry and framework.

use thiserror::Error;

use crate::types::{FileMode, ResourceKind};

/// Errors raised by invalid use of the resource registry.
///
/// The registry never logs or recovers from these itself. Registration
/// failures are programming errors and lookup failures are always fatal to
/// the calling lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A runner, config type, or upgrader chain already exists under this key.
    #[error("there is already a {kind} registered for `{key}`")]
    Conflict { kind: ResourceKind, key: String },

    /// Nothing is registered under this key.
    #[error("{}", not_found_message(kind, key))]
    NotFound { kind: ResourceKind, key: String },

    /// An upgrade chain whose length disagrees with the declared version.
    #[error(
        "config `{type_hint}` declares version {version} but supplies {len} upgraders"
    )]
    InvalidUpgradeChain {
        type_hint: String,
        version: u32,
        len: usize,
    },

    /// A config type registered under a key other than its own type hint.
    #[error("config type `{type_hint}` cannot be registered under `{key}`")]
    TypeHintMismatch { key: String, type_hint: String },
}

impl RegistryError {
    /// Builds the lookup failure for a filesystem search in the given mode.
    pub fn no_file_system(uri: impl Into<String>, mode: FileMode) -> Self {
        RegistryError::NotFound {
            kind: ResourceKind::FileSystem(mode),
            key: uri.into(),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, RegistryError::Conflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound { .. })
    }
}

fn not_found_message(kind: &ResourceKind, key: &str) -> String {
    match kind {
        ResourceKind::FileSystem(mode) => {
            format!("no matching filesystem to handle {} uri {key}", mode.verb())
        }
        other => format!("{key} is not a registered {other}"),
    }
}

/// The primary error type used across Terrapipe crates.
#[derive(Debug, Error)]
pub enum TerrapipeError {
    /// Registration or lookup against the registry failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration errors (invalid TOML, unknown sections, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A plugin descriptor is malformed or incompatible with this framework.
    #[error("plugin `{name}` cannot be loaded: {message}")]
    Plugin { name: String, message: String },

    /// A plugin's registration entry point failed.
    #[error("plugin `{name}` failed to register: {source}")]
    PluginRegistration {
        name: String,
        #[source]
        source: RegistryError,
    },

    /// A serialized config could not be brought up to its current version.
    #[error("cannot upgrade `{type_hint}` config: {message}")]
    Upgrade { type_hint: String, message: String },

    /// A runner failed while executing pipeline commands.
    #[error("runner error: {message}")]
    Runner {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Reading or writing a local file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
