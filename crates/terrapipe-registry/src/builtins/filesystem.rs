// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in filesystems: read-only HTTP(S) and the local disk.

use terrapipe_core::{FileMode, FileSystem};
use url::Url;

/// Scheme of `uri`, or `None` for plain paths.
///
/// Single-letter schemes are Windows drive letters (`C:\data`), not schemes.
fn uri_scheme(uri: &str) -> Option<String> {
    Url::parse(uri)
        .ok()
        .map(|url| url.scheme().to_string())
        .filter(|scheme| scheme.len() > 1)
}

/// Serves `http://` and `https://` URIs for reading.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFileSystem;

impl FileSystem for HttpFileSystem {
    fn name(&self) -> &str {
        "http"
    }

    fn matches_uri(&self, uri: &str, mode: FileMode) -> bool {
        mode == FileMode::Read
            && matches!(uri_scheme(uri).as_deref(), Some("http") | Some("https"))
    }
}

/// Serves `file://` URIs and scheme-less paths in any mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn name(&self) -> &str {
        "local"
    }

    fn matches_uri(&self, uri: &str, _mode: FileMode) -> bool {
        matches!(uri_scheme(uri).as_deref(), None | Some("file"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_matches_only_reads() {
        let fs = HttpFileSystem;
        assert!(fs.matches_uri("http://example.com/a.tif", FileMode::Read));
        assert!(fs.matches_uri("https://example.com/a.tif", FileMode::Read));
        assert!(!fs.matches_uri("https://example.com/a.tif", FileMode::Write));
        assert!(!fs.matches_uri("/tmp/a.tif", FileMode::Read));
    }

    #[test]
    fn local_matches_paths_and_file_uris() {
        let fs = LocalFileSystem;
        assert!(fs.matches_uri("/tmp/a.tif", FileMode::Read));
        assert!(fs.matches_uri("relative/a.tif", FileMode::Write));
        assert!(fs.matches_uri("file:///tmp/a.tif", FileMode::Write));
        assert!(fs.matches_uri("C:\\data\\a.tif", FileMode::Read));
        assert!(!fs.matches_uri("s3://bucket/a.tif", FileMode::Read));
        assert!(!fs.matches_uri("http://example.com/a.tif", FileMode::Read));
    }
}
