// ============================================================================
// tcap-core/src/processing/append.rs
// ============================================================================
//
// APPEND ORCHESTRATION: Probe -> Plan -> Render -> Place
//
// Runs one (video, image) pair through the whole pipeline, sequentially and
// synchronously. Both inputs are checked before any external command runs.
// Nothing is retried.

use crate::config::ThumbnailConfig;
use crate::error::{CoreResult, InputKind, not_found_error};
use crate::external::{EncodingOptions, MediaEngine};
use crate::media::MediaProperties;
use crate::processing::output::OutputTarget;
use crate::processing::planner::{StillSpec, plan};
use crate::processing::render::{RenderJob, render};
use crate::utils::format_duration;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// One append request: which files, and how.
#[derive(Debug, Clone)]
pub struct AppendRequest {
    pub video: PathBuf,
    pub image: PathBuf,
    /// Explicit output path; ignored in in-place mode
    pub output: Option<PathBuf>,
    pub config: ThumbnailConfig,
}

impl AppendRequest {
    #[must_use]
    pub fn new(video: impl Into<PathBuf>, image: impl Into<PathBuf>) -> Self {
        Self {
            video: video.into(),
            image: image.into(),
            output: None,
            config: ThumbnailConfig::default(),
        }
    }

    #[must_use]
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: ThumbnailConfig) -> Self {
        self.config = config;
        self
    }
}

/// Result of a successful append.
#[derive(Debug, Clone)]
pub struct AppendOutcome {
    pub output_path: PathBuf,
    pub properties: MediaProperties,
    pub in_place: bool,
    /// Expected length of the output in seconds
    pub output_duration_secs: f64,
    pub elapsed: Duration,
}

/// Appends the still image of `request` to its video.
///
/// `on_progress` receives processed output seconds while the render runs.
pub fn append_thumbnail<E>(
    engine: &E,
    request: &AppendRequest,
    on_progress: &mut dyn FnMut(f64),
) -> CoreResult<AppendOutcome>
where
    E: MediaEngine + ?Sized,
{
    let start = Instant::now();
    request.config.validate()?;
    ensure_exists(InputKind::Video, &request.video)?;
    ensure_exists(InputKind::Still, &request.image)?;

    let properties = engine.probe(&request.video)?;
    log::info!(
        "Source {}: {}x{} @ {:.3} fps, {} duration, audio: {}",
        request.video.display(),
        properties.width,
        properties.height,
        properties.frame_rate,
        format_duration(properties.duration),
        if properties.has_audio { "yes" } else { "no (silence will be synthesized)" }
    );

    let spec = StillSpec::from_config(&request.image, &request.config);
    let render_plan = plan(&properties, &spec);
    let output_duration_secs = render_plan.expected_duration_secs;

    let target = if request.config.in_place {
        if request.output.is_some() {
            log::warn!("Output path is ignored in in-place mode");
        }
        OutputTarget::in_place(&request.video)?
    } else {
        OutputTarget::direct(&request.video, request.output.as_deref())
    };
    let in_place = target.is_in_place();

    let job = RenderJob {
        source_video: request.video.clone(),
        still_image: spec.image_path.clone(),
        output_path: target.render_path().to_path_buf(),
        plan: render_plan,
        encoding: EncodingOptions::with_quality(spec.video_quality, spec.audio_bitrate.clone()),
    };

    let rendered = render(engine, &job, on_progress);
    let output_path = target.finish(rendered)?;

    let elapsed = start.elapsed();
    log::info!(
        "Wrote {} in {:.1}s",
        output_path.display(),
        elapsed.as_secs_f64()
    );

    Ok(AppendOutcome {
        output_path,
        properties,
        in_place,
        output_duration_secs,
        elapsed,
    })
}

fn ensure_exists(kind: InputKind, path: &Path) -> CoreResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(not_found_error(kind, path))
    }
}
