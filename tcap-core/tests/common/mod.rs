//! Shared helpers for tcap-core integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use tcap_core::error::command_failed_error;
use tcap_core::{CoreError, CoreResult, MediaEngine, MediaProperties, RenderJob};

/// What the mock does when asked to render.
#[derive(Debug, Clone)]
pub enum RenderBehavior {
    /// Write these bytes to the job's output path and succeed.
    Write(Vec<u8>),
    /// Write these bytes, then fail as ffmpeg would.
    FailAfterWriting(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Probe(PathBuf),
    Render { output: PathBuf, graph: String },
}

/// Records every call and never spawns a process.
pub struct MockEngine {
    pub properties: MediaProperties,
    pub behavior: RenderBehavior,
    pub calls: RefCell<Vec<EngineCall>>,
}

impl MockEngine {
    pub fn new(properties: MediaProperties, behavior: RenderBehavior) -> Self {
        Self {
            properties,
            behavior,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn succeeding(bytes: &[u8]) -> Self {
        Self::new(hd_properties(), RenderBehavior::Write(bytes.to_vec()))
    }

    pub fn failing(bytes: &[u8]) -> Self {
        Self::new(hd_properties(), RenderBehavior::FailAfterWriting(bytes.to_vec()))
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.borrow().clone()
    }
}

impl MediaEngine for MockEngine {
    fn probe(&self, video_path: &Path) -> CoreResult<MediaProperties> {
        self.calls
            .borrow_mut()
            .push(EngineCall::Probe(video_path.to_path_buf()));
        Ok(self.properties)
    }

    fn render(&self, job: &RenderJob, on_progress: &mut dyn FnMut(f64)) -> CoreResult<()> {
        self.calls.borrow_mut().push(EngineCall::Render {
            output: job.output_path.clone(),
            graph: job.plan.graph.to_filter_complex(),
        });
        on_progress(job.plan.expected_duration_secs / 2.0);
        match &self.behavior {
            RenderBehavior::Write(bytes) => {
                fs::write(&job.output_path, bytes)?;
                on_progress(job.plan.expected_duration_secs);
                Ok(())
            }
            RenderBehavior::FailAfterWriting(bytes) => {
                fs::write(&job.output_path, bytes)?;
                Err(failed_render())
            }
        }
    }
}

pub fn failed_render() -> CoreError {
    command_failed_error(
        "ffmpeg -y -i clip.mp4",
        ExitStatus::from_raw(1 << 8),
        "Conversion failed!",
    )
}

pub fn hd_properties() -> MediaProperties {
    MediaProperties {
        width: 1920,
        height: 1080,
        frame_rate: 30.0,
        duration: 10.0,
        has_audio: true,
    }
}

/// Names in `dir` containing the temp marker.
pub fn leftover_temps(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.contains(tcap_core::temp_files::TEMP_MARKER))
        .collect()
}

/// Creates a video and an image placeholder in `dir`.
pub fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let video = dir.join("clip.mp4");
    let image = dir.join("clip.png");
    fs::write(&video, b"original video").unwrap();
    fs::write(&image, b"png").unwrap();
    (video, image)
}
