// ============================================================================
// tcap-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffmpeg and ffprobe
//
// This module encapsulates every interaction with the external media engine.
// The rest of the crate only sees the `MediaEngine` trait, so tests can swap
// in a recording engine and the invocation mechanism can change without
// touching the planner or the output strategy.
//
// KEY COMPONENTS:
// - MediaEngine: probe + render abstraction
// - FfmpegEngine: production implementation (ffprobe via std::process,
//   ffmpeg via ffmpeg-sidecar)
// - Dependency checking

use crate::error::{CoreError, CoreResult};
use crate::media::{MediaProperties, probe_media};
use crate::processing::render::RenderJob;

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Contains the render argument builder and encoding options
pub mod ffmpeg_builder;

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// Contains traits and implementations for executing ffprobe commands
pub mod ffprobe_executor;

pub use ffmpeg_builder::{EncodingOptions, FfmpegArgsBuilder};
pub use ffmpeg_executor::{FfmpegRunner, SidecarRunner};
pub use ffprobe_executor::{CommandFfprobeExecutor, FfprobeExecutor};

/// The external media-processing engine, as seen by the core.
pub trait MediaEngine {
    /// Reads the source properties needed for planning.
    fn probe(&self, video_path: &Path) -> CoreResult<MediaProperties>;

    /// Runs the render to completion. `on_progress` receives processed output seconds.
    fn render(&self, job: &RenderJob, on_progress: &mut dyn FnMut(f64)) -> CoreResult<()>;
}

/// `MediaEngine` backed by the ffprobe and ffmpeg binaries.
#[derive(Debug, Clone, Default)]
pub struct FfmpegEngine {
    ffprobe: CommandFfprobeExecutor,
    ffmpeg: SidecarRunner,
}

impl FfmpegEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses explicit binaries instead of whatever is on PATH.
    #[must_use]
    pub fn with_programs(ffmpeg: impl Into<OsString>, ffprobe: impl Into<OsString>) -> Self {
        Self {
            ffprobe: CommandFfprobeExecutor::with_program(ffprobe),
            ffmpeg: SidecarRunner::with_program(ffmpeg),
        }
    }
}

impl MediaEngine for FfmpegEngine {
    fn probe(&self, video_path: &Path) -> CoreResult<MediaProperties> {
        probe_media(&self.ffprobe, video_path)
    }

    fn render(&self, job: &RenderJob, on_progress: &mut dyn FnMut(f64)) -> CoreResult<()> {
        self.ffmpeg.run(&job.to_args(), on_progress)
    }
}

/// Checks if a required external command is available and executable.
///
/// Runs `<cmd_name> -version` with output discarded; only whether the process
/// could be started matters.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(crate::error::command_start_error(cmd_name, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dependency_missing() {
        let result = check_dependency("tcap-definitely-not-a-real-binary");
        assert!(matches!(result, Err(CoreError::DependencyNotFound(_))));
    }
}
