// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem that matches URIs by prefix.

use terrapipe_core::{FileMode, FileSystem};

#[derive(Debug, Clone)]
pub struct MockFileSystem {
    name: String,
    prefix: String,
    writable: bool,
}

impl MockFileSystem {
    /// Matches any URI starting with `prefix`, in both modes.
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            writable: true,
        }
    }

    /// Matches any URI starting with `prefix`, for reads only.
    pub fn read_only(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            writable: false,
            ..Self::new(name, prefix)
        }
    }
}

impl FileSystem for MockFileSystem {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches_uri(&self, uri: &str, mode: FileMode) -> bool {
        uri.starts_with(&self.prefix) && (self.writable || mode == FileMode::Read)
    }
}
