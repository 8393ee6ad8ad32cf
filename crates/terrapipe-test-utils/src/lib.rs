// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Terrapipe registry tests.
//!
//! - [`MockRunner`] - runner that records every request it receives
//! - [`MockFileSystem`] - filesystem matching a fixed URI prefix
//! - [`RecordingPipeline`] - pipeline that records commands and can fail on demand

pub mod mock_file_system;
pub mod mock_runner;
pub mod pipeline;

pub use mock_file_system::MockFileSystem;
pub use mock_runner::MockRunner;
pub use pipeline::RecordingPipeline;
