// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runner that records requests instead of executing them.

use std::sync::Mutex;

use terrapipe_core::{Pipeline, RunRequest, Runner, TerrapipeError};

/// A runner identified by name that remembers the commands it was given.
#[derive(Debug)]
pub struct MockRunner {
    name: String,
    runs: Mutex<Vec<Vec<String>>>,
}

impl MockRunner {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runs: Mutex::new(Vec::new()),
        }
    }

    /// Command lists of every run so far, oldest first.
    pub fn runs(&self) -> Vec<Vec<String>> {
        self.runs.lock().map(|runs| runs.clone()).unwrap_or_default()
    }
}

impl Runner for MockRunner {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, request: &RunRequest<'_>, _pipeline: &mut dyn Pipeline) -> Result<(), TerrapipeError> {
        self.runs
            .lock()
            .map_err(|e| TerrapipeError::Internal(format!("mock runner lock poisoned: {e}")))?
            .push(request.commands.to_vec());
        Ok(())
    }
}
