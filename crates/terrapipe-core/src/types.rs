// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by resource traits and the registry.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Access intent passed to filesystem URI matching.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FileMode {
    Read,
    Write,
}

impl FileMode {
    /// Phrase used in lookup failures, e.g. "reading from".
    pub fn verb(&self) -> &'static str {
        match self {
            FileMode::Read => "reading from",
            FileMode::Write => "writing to",
        }
    }
}

/// The table a registry key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Runner,
    FileSystem(FileMode),
    Config,
    ConfigUpgraders,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Runner => write!(f, "runner"),
            ResourceKind::FileSystem(mode) => write!(f, "{mode} filesystem"),
            ResourceKind::Config => write!(f, "config type hint"),
            ResourceKind::ConfigUpgraders => write!(f, "config upgrader type hint"),
        }
    }
}

/// One slice of a command that a runner fans out across workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub index: usize,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn file_mode_display_and_parse() {
        for mode in [FileMode::Read, FileMode::Write] {
            let parsed = FileMode::from_str(&mode.to_string()).unwrap();
            assert_eq!(parsed, mode);
        }
        assert_eq!(FileMode::Write.to_string(), "write");
        assert!(FileMode::from_str("append").is_err());
    }

    #[test]
    fn resource_kind_display() {
        assert_eq!(ResourceKind::Runner.to_string(), "runner");
        assert_eq!(
            ResourceKind::FileSystem(FileMode::Read).to_string(),
            "read filesystem"
        );
        assert_eq!(ResourceKind::Config.to_string(), "config type hint");
    }
}
