// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resources registered before any plugin loads.
//!
//! - `inprocess` runner
//! - `http` filesystem (read-only), then `local`
//! - `pipeline` config type (version 1)
//! - `core` and `plugins` global-config sections

pub mod config;
pub mod filesystem;
pub mod runner;

use std::sync::Arc;

use terrapipe_core::RegistryError;

use crate::registry::Registry;

pub use config::{register_builtin_configs, register_builtin_schema, PIPELINE};
pub use filesystem::{HttpFileSystem, LocalFileSystem};
pub use runner::{InProcessRunner, INPROCESS};

/// Register every built-in resource. HTTP is added before local so that
/// registration order gives it priority.
pub fn register_builtins(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.add_runner(INPROCESS, Arc::new(InProcessRunner))?;
    registry.add_file_system(Arc::new(HttpFileSystem));
    registry.add_file_system(Arc::new(LocalFileSystem));
    register_builtin_configs(registry)?;
    register_builtin_schema(registry);
    Ok(())
}
