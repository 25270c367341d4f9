//! FFprobe integration for media analysis.
//!
//! This module runs ffprobe invocations and hands back their standard output.
//! Parsing lives in `media::probe` so it can be exercised without the tool.

use crate::error::{CoreResult, command_failed_error, command_start_error};
use crate::utils::quote_command;
use std::ffi::OsString;
use std::process::Command;

/// Trait for anything that can answer an ffprobe query.
pub trait FfprobeExecutor {
    /// Runs ffprobe with `args` and returns stdout on a zero exit status.
    fn query(&self, args: &[OsString]) -> CoreResult<String>;
}

/// Runs the `ffprobe` binary found on PATH (or at a configured location).
#[derive(Debug, Clone)]
pub struct CommandFfprobeExecutor {
    program: OsString,
}

impl Default for CommandFfprobeExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFfprobeExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("ffprobe")
    }

    #[must_use]
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl FfprobeExecutor for CommandFfprobeExecutor {
    fn query(&self, args: &[OsString]) -> CoreResult<String> {
        let command_line = quote_command(&self.program, args);
        log::debug!("Running ffprobe: {command_line}");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| command_start_error(command_line.clone(), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(command_failed_error(command_line, output.status, stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
