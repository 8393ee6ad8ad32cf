// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage backend contract used for URI dispatch.

use crate::types::FileMode;

/// A storage backend selected by URI and access mode.
///
/// Only the matching predicate is part of the registry contract; reading and
/// writing bytes is left to the concrete implementation.
pub trait FileSystem: Send + Sync + 'static {
    /// Short identifier used in listings and logs.
    fn name(&self) -> &str;

    /// Returns true if this backend can serve `uri` in the given mode.
    fn matches_uri(&self, uri: &str, mode: FileMode) -> bool;
}
