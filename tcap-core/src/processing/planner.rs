// ============================================================================
// tcap-core/src/processing/planner.rs
// ============================================================================
//
// SEGMENT PLANNER: Still Segment and Concatenation Graph Derivation
//
// Given the probed source properties and the requested still options, derive
// the filter graph that appends the still segment to the source.
//
// A single-pass concat requires every segment to carry the same set of
// streams at compatible formats. Both audio operands are therefore always
// present: the source's own track resampled to 48 kHz stereo, or silence
// trimmed to the source duration when the source has none, and silence
// trimmed to the still duration for the still segment.

use crate::config::{
    PIXEL_FORMAT, SILENCE_CHANNEL_LAYOUT, SILENCE_SAMPLE_RATE, ThumbnailConfig,
};
use crate::media::MediaProperties;
use crate::processing::filter_graph::{
    Filter, FilterChain, FilterGraph, InputStream, MediaKind, Segment,
};
use std::path::{Path, PathBuf};

/// Input index of the source video in the render command.
pub const SOURCE_INPUT_INDEX: usize = 0;

/// Input index of the looped still image in the render command.
pub const STILL_INPUT_INDEX: usize = 1;

/// The still image and the options that shape its segment and the encode.
#[derive(Debug, Clone, PartialEq)]
pub struct StillSpec {
    pub image_path: PathBuf,
    pub still_duration_secs: f64,
    pub video_quality: u8,
    pub audio_bitrate: String,
}

impl StillSpec {
    #[must_use]
    pub fn from_config(image_path: &Path, config: &ThumbnailConfig) -> Self {
        Self {
            image_path: image_path.to_path_buf(),
            still_duration_secs: config.still_duration_secs,
            video_quality: config.video_quality,
            audio_bitrate: config.audio_bitrate.clone(),
        }
    }

    /// Still duration as written into the command line and graph.
    #[must_use]
    pub fn duration_arg(&self) -> String {
        format_still_duration(self.still_duration_secs)
    }
}

/// Derived render graph for one invocation. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub graph: FilterGraph,

    /// How long the still image input is looped for (`-t`)
    pub still_duration_arg: String,

    /// Expected output length in seconds, for progress reporting
    pub expected_duration_secs: f64,
}

fn format_still_duration(secs: f64) -> String {
    format!("{secs}")
}

fn format_source_duration(secs: f64) -> String {
    format!("{secs:.6}")
}

/// Builds the render plan. Pure: no I/O.
#[must_use]
pub fn plan(props: &MediaProperties, spec: &StillSpec) -> RenderPlan {
    let still_duration = spec.duration_arg();

    let source_video = FilterChain::from_input(InputStream::new(SOURCE_INPUT_INDEX, MediaKind::Video))
        .then(Filter::reset_pts(MediaKind::Video));

    let source_audio = if props.has_audio {
        FilterChain::from_input(InputStream::new(SOURCE_INPUT_INDEX, MediaKind::Audio))
            .then(Filter::aresample(SILENCE_SAMPLE_RATE))
            .then(Filter::aformat_layout(SILENCE_CHANNEL_LAYOUT))
            .then(Filter::reset_pts(MediaKind::Audio))
    } else {
        log::debug!(
            "Source has no audio, synthesizing {}s of silence",
            format_source_duration(props.duration)
        );
        silence(&format_source_duration(props.duration))
    };

    let still_video = FilterChain::from_input(InputStream::new(STILL_INPUT_INDEX, MediaKind::Video))
        .then(Filter::scale(props.width, props.height))
        .then(Filter::fps(props.frame_rate))
        .then(Filter::format(PIXEL_FORMAT))
        .then(Filter::setsar(1))
        .then(Filter::trim(MediaKind::Video, &still_duration))
        .then(Filter::reset_pts(MediaKind::Video));

    let still_audio = silence(&still_duration);

    let graph = FilterGraph::concat(
        Segment {
            video: source_video,
            audio: source_audio,
        },
        Segment {
            video: still_video,
            audio: still_audio,
        },
    );

    RenderPlan {
        graph,
        still_duration_arg: still_duration,
        expected_duration_secs: props.duration + spec.still_duration_secs,
    }
}

fn silence(duration: &str) -> FilterChain {
    FilterChain::from_source(Filter::anullsrc(SILENCE_SAMPLE_RATE, SILENCE_CHANNEL_LAYOUT))
        .then(Filter::trim(MediaKind::Audio, duration))
        .then(Filter::reset_pts(MediaKind::Audio))
}
