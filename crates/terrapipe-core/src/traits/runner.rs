// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pipeline runner contract.

use crate::error::TerrapipeError;
use crate::types::Split;

/// The commands a runner is asked to execute for one pipeline.
#[derive(Debug, Clone, Copy)]
pub struct RunRequest<'a> {
    /// URI of the serialized pipeline config being run.
    pub config_uri: &'a str,
    /// Commands to run, in order.
    pub commands: &'a [String],
    /// Subset of `commands` that may be split across workers.
    pub split_commands: &'a [String],
    /// Number of splits for splittable commands. Values below 2 disable splitting.
    pub num_splits: usize,
}

/// The pipeline side of a run: executes a single named command.
pub trait Pipeline {
    fn run_command(&mut self, command: &str, split: Option<Split>) -> Result<(), TerrapipeError>;
}

/// A named pipeline-execution strategy.
pub trait Runner: Send + Sync + 'static {
    /// The name users pass on the command line to select this runner.
    fn name(&self) -> &str;

    /// Executes the requested commands against `pipeline`.
    fn run(&self, request: &RunRequest<'_>, pipeline: &mut dyn Pipeline) -> Result<(), TerrapipeError>;
}
