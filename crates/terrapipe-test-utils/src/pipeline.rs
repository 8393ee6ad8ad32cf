// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pipeline double for runner tests.

use terrapipe_core::{Pipeline, Split, TerrapipeError};

/// Records each `run_command` call, optionally failing on one command.
#[derive(Debug, Default)]
pub struct RecordingPipeline {
    calls: Vec<(String, Option<Split>)>,
    fail_on: Option<String>,
}

impl RecordingPipeline {
    /// A pipeline whose `command` returns an error (after being recorded).
    pub fn failing_on(command: impl Into<String>) -> Self {
        Self {
            calls: Vec::new(),
            fail_on: Some(command.into()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Option<Split>)> {
        self.calls.clone()
    }
}

impl Pipeline for RecordingPipeline {
    fn run_command(&mut self, command: &str, split: Option<Split>) -> Result<(), TerrapipeError> {
        self.calls.push((command.to_string(), split));
        if self.fail_on.as_deref() == Some(command) {
            return Err(TerrapipeError::Runner {
                message: format!("command `{command}` failed"),
                source: None,
            });
        }
        Ok(())
    }
}
