// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contracts for resources that can be registered with the registry.
//!
//! Handles are stored as `Arc<dyn Trait>`, so every trait here requires
//! `Send + Sync` to allow lookups from any thread once bootstrap is done.

pub mod config;
pub mod filesystem;
pub mod runner;

pub use config::{ConfigType, ConfigUpgrader, FieldSchema};
pub use filesystem::FileSystem;
pub use runner::{Pipeline, RunRequest, Runner};
