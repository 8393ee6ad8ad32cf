// SPDX-FileCopyrightText: 2026 Terrapipe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runner that executes pipeline commands in the current process.

use terrapipe_core::{Pipeline, RunRequest, Runner, Split, TerrapipeError};
use tracing::info;

/// Name of the in-process runner.
pub const INPROCESS: &str = "inprocess";

/// Runs each command sequentially in this process.
///
/// Splittable commands are run once per split when more than one split is
/// requested. The first failing command aborts the run.
#[derive(Debug, Default, Clone, Copy)]
pub struct InProcessRunner;

impl Runner for InProcessRunner {
    fn name(&self) -> &str {
        INPROCESS
    }

    fn run(&self, request: &RunRequest<'_>, pipeline: &mut dyn Pipeline) -> Result<(), TerrapipeError> {
        for command in request.commands {
            let splittable = request.split_commands.contains(command);
            if splittable && request.num_splits > 1 {
                for index in 0..request.num_splits {
                    info!(
                        config_uri = request.config_uri,
                        command = %command,
                        split = index,
                        "running command"
                    );
                    pipeline.run_command(
                        command,
                        Some(Split {
                            index,
                            count: request.num_splits,
                        }),
                    )?;
                }
            } else {
                info!(config_uri = request.config_uri, command = %command, "running command");
                pipeline.run_command(command, None)?;
            }
        }
        Ok(())
    }
}
