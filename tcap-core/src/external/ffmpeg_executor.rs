// ============================================================================
// tcap-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: FFmpeg Process Management
//
// Runs one ffmpeg invocation to completion through ffmpeg-sidecar, forwarding
// progress to the caller and keeping the diagnostic lines so a non-zero exit
// can be reported with the exact command and what ffmpeg said about it.
//
// There is no timeout and no retry: a failed render is deterministic for the
// same inputs.

use crate::error::{CoreResult, command_failed_error, command_start_error, command_wait_error};
use crate::utils::{parse_ffmpeg_time, quote_command};
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::ffi::OsString;
use std::io;

/// Trait representing something that can run an ffmpeg command to completion.
pub trait FfmpegRunner {
    /// Runs ffmpeg with `args`, reporting processed output seconds to `on_progress`.
    fn run(&self, args: &[OsString], on_progress: &mut dyn FnMut(f64)) -> CoreResult<()>;
}

/// Concrete implementation of `FfmpegRunner` using `ffmpeg-sidecar`.
#[derive(Debug, Clone)]
pub struct SidecarRunner {
    program: OsString,
}

impl Default for SidecarRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl SidecarRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("ffmpeg")
    }

    #[must_use]
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

/// Keeps the lines worth showing when a render fails.
fn diagnostic_line(event: &FfmpegEvent) -> Option<&str> {
    match event {
        FfmpegEvent::Log(LogLevel::Warning | LogLevel::Error | LogLevel::Fatal, line) => {
            Some(line.as_str())
        }
        FfmpegEvent::Error(message) => Some(message.as_str()),
        _ => None,
    }
}

impl FfmpegRunner for SidecarRunner {
    fn run(&self, args: &[OsString], on_progress: &mut dyn FnMut(f64)) -> CoreResult<()> {
        let command_line = quote_command(&self.program, args);
        log::debug!("Running ffmpeg: {command_line}");

        let mut cmd = FfmpegCommand::new_with_path(&self.program);
        cmd.args(args);

        let mut child = cmd
            .spawn()
            .map_err(|e| command_start_error(command_line.clone(), e))?;

        let mut diagnostics: Vec<String> = Vec::new();
        let events = child.iter().map_err(|e| {
            command_start_error(command_line.clone(), io::Error::other(e.to_string()))
        })?;

        for event in events {
            if let FfmpegEvent::Progress(progress) = &event {
                if let Some(secs) = parse_ffmpeg_time(&progress.time) {
                    on_progress(secs);
                }
            } else if let Some(line) = diagnostic_line(&event) {
                log::debug!("ffmpeg: {line}");
                diagnostics.push(line.to_string());
            }
        }

        let status = child
            .wait()
            .map_err(|e| command_wait_error(command_line.clone(), e))?;

        if !status.success() {
            log::error!("ffmpeg exited with {status}: {command_line}");
            return Err(command_failed_error(command_line, status, diagnostics.join("\n")));
        }

        Ok(())
    }
}
