//! Render invocation.
//!
//! A `RenderJob` bundles the two inputs, the output path, the planned graph
//! and the encoding options into the single batched ffmpeg call. Both inputs
//! are checked before anything external runs.

use crate::error::{CoreResult, InputKind, not_found_error};
use crate::external::{EncodingOptions, FfmpegArgsBuilder, MediaEngine};
use crate::processing::planner::RenderPlan;
use std::ffi::OsString;
use std::path::PathBuf;

/// Everything the media engine needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJob {
    pub source_video: PathBuf,
    pub still_image: PathBuf,
    pub output_path: PathBuf,
    pub plan: RenderPlan,
    pub encoding: EncodingOptions,
}

impl RenderJob {
    /// ffmpeg arguments for this job, program name excluded.
    #[must_use]
    pub fn to_args(&self) -> Vec<OsString> {
        let graph = &self.plan.graph;
        FfmpegArgsBuilder::new()
            .overwrite()
            .input(&self.source_video)
            .looped_input(&self.still_image, &self.plan.still_duration_arg)
            .filter_complex(&graph.to_filter_complex())
            .map(&graph.video_output().to_string())
            .map(&graph.audio_output().to_string())
            .encoding(&self.encoding)
            .output(&self.output_path)
            .build()
    }
}

/// Runs `job` on `engine`. Missing inputs fail with `NotFound` before the engine is called.
pub fn render<E>(engine: &E, job: &RenderJob, on_progress: &mut dyn FnMut(f64)) -> CoreResult<()>
where
    E: MediaEngine + ?Sized,
{
    if !job.source_video.exists() {
        return Err(not_found_error(InputKind::Video, &job.source_video));
    }
    if !job.still_image.exists() {
        return Err(not_found_error(InputKind::Still, &job.still_image));
    }

    log::info!(
        "Rendering {} + {} -> {}",
        job.source_video.display(),
        job.still_image.display(),
        job.output_path.display()
    );
    engine.render(job, on_progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaProperties;
    use crate::processing::planner::{StillSpec, plan};

    fn job() -> RenderJob {
        let props = MediaProperties {
            width: 1920,
            height: 1080,
            frame_rate: 30.0,
            duration: 10.0,
            has_audio: true,
        };
        let spec = StillSpec {
            image_path: PathBuf::from("/videos/clip.png"),
            still_duration_secs: 0.3,
            video_quality: 18,
            audio_bitrate: "192k".into(),
        };
        RenderJob {
            source_video: PathBuf::from("/videos/clip.mp4"),
            still_image: spec.image_path.clone(),
            output_path: PathBuf::from("/videos/clip_thumb.mp4"),
            plan: plan(&props, &spec),
            encoding: EncodingOptions::with_quality(spec.video_quality, spec.audio_bitrate.clone()),
        }
    }

    #[test]
    fn test_render_args_layout() {
        let job = job();
        let args: Vec<String> = job
            .to_args()
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        let graph = job.plan.graph.to_filter_complex();
        let expected: Vec<&str> = vec![
            "-y",
            "-i", "/videos/clip.mp4",
            "-loop", "1",
            "-t", "0.3",
            "-i", "/videos/clip.png",
            "-filter_complex", &graph,
            "-map", "[v]",
            "-map", "[a]",
            "-c:v", "libx264",
            "-pix_fmt", "yuv420p",
            "-profile:v", "high",
            "-level", "4.1",
            "-crf", "18",
            "-preset", "medium",
            "-c:a", "aac",
            "-b:a", "192k",
            "-movflags", "+faststart",
            "/videos/clip_thumb.mp4",
        ];
        assert_eq!(args, expected);
    }

    struct UnreachableEngine;

    impl MediaEngine for UnreachableEngine {
        fn probe(&self, _: &std::path::Path) -> CoreResult<MediaProperties> {
            panic!("probe must not run");
        }

        fn render(&self, _: &RenderJob, _: &mut dyn FnMut(f64)) -> CoreResult<()> {
            panic!("render must not run");
        }
    }

    #[test]
    fn test_missing_still_fails_before_engine() {
        let dir = tempfile::tempdir().unwrap();
        let mut job = job();
        job.source_video = dir.path().join("clip.mp4");
        job.still_image = dir.path().join("clip.png");
        std::fs::write(&job.source_video, b"video").unwrap();

        let err = render(&UnreachableEngine, &job, &mut |_| {}).unwrap_err();
        assert!(matches!(
            err,
            crate::CoreError::NotFound { kind: InputKind::Still, .. }
        ));
    }
}
