// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource registry, config upgrade chains, and plugin bootstrap.
//!
//! The registry holds every runner, filesystem, and versioned config type
//! known to the process. It is filled at startup by [`bootstrap`]: built-in
//! resources first, then each plugin discovered through the link-time
//! [`PluginDef`] collection. After that it is shared read-only.

pub mod bootstrap;
pub mod builtins;
pub mod plugin;
pub mod registry;
pub mod upgrade;

pub use bootstrap::{bootstrap, bootstrap_with, FRAMEWORK_VERSION};
pub use plugin::{discovered_plugins, LoadedPlugin, PluginDef, RegisterFn};
pub use registry::Registry;
pub use upgrade::{upgrade_config, UpgradeChain, TYPE_HINT_KEY, VERSION_KEY};
