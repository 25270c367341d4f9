//! FFmpeg command builder for the append render.
//!
//! This module turns a render job into the argument vector of a single
//! batched ffmpeg call: both inputs, the filter graph, explicit output
//! mapping, and the H.264/AAC encoding options.

use crate::config::{
    AUDIO_CODEC, DEFAULT_AUDIO_BITRATE, DEFAULT_ENCODER_PRESET, DEFAULT_VIDEO_QUALITY,
    H264_LEVEL, H264_PROFILE, PIXEL_FORMAT, VIDEO_CODEC,
};
use std::ffi::OsString;
use std::path::Path;

/// Output encoding parameters.
///
/// Only `crf` and `audio_bitrate` are user-tunable; the rest are fixed for
/// broad playback compatibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingOptions {
    pub video_codec: String,
    pub pixel_format: String,
    pub profile: String,
    pub level: String,
    pub crf: u8,
    pub preset: String,
    pub audio_codec: String,
    pub audio_bitrate: String,
    /// Move the moov atom to the front for progressive playback
    pub faststart: bool,
}

impl Default for EncodingOptions {
    fn default() -> Self {
        Self {
            video_codec: VIDEO_CODEC.to_string(),
            pixel_format: PIXEL_FORMAT.to_string(),
            profile: H264_PROFILE.to_string(),
            level: H264_LEVEL.to_string(),
            crf: DEFAULT_VIDEO_QUALITY,
            preset: DEFAULT_ENCODER_PRESET.to_string(),
            audio_codec: AUDIO_CODEC.to_string(),
            audio_bitrate: DEFAULT_AUDIO_BITRATE.to_string(),
            faststart: true,
        }
    }
}

impl EncodingOptions {
    #[must_use]
    pub fn with_quality(crf: u8, audio_bitrate: impl Into<String>) -> Self {
        Self {
            crf,
            audio_bitrate: audio_bitrate.into(),
            ..Self::default()
        }
    }
}

/// Builder for the render argument vector (program name excluded).
#[derive(Debug, Default)]
pub struct FfmpegArgsBuilder {
    args: Vec<OsString>,
}

impl FfmpegArgsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn flag_value(self, flag: &str, value: impl Into<OsString>) -> Self {
        self.arg(flag).arg(value)
    }

    /// `-y`: the output path is always ours to overwrite.
    #[must_use]
    pub fn overwrite(self) -> Self {
        self.arg("-y")
    }

    #[must_use]
    pub fn input(self, path: &Path) -> Self {
        self.flag_value("-i", path.as_os_str())
    }

    /// An image input looped for `duration` seconds.
    #[must_use]
    pub fn looped_input(self, path: &Path, duration: &str) -> Self {
        self.flag_value("-loop", "1")
            .flag_value("-t", duration)
            .input(path)
    }

    #[must_use]
    pub fn filter_complex(self, graph: &str) -> Self {
        self.flag_value("-filter_complex", graph)
    }

    #[must_use]
    pub fn map(self, pad: &str) -> Self {
        self.flag_value("-map", pad)
    }

    #[must_use]
    pub fn encoding(self, options: &EncodingOptions) -> Self {
        let builder = self
            .flag_value("-c:v", options.video_codec.as_str())
            .flag_value("-pix_fmt", options.pixel_format.as_str())
            .flag_value("-profile:v", options.profile.as_str())
            .flag_value("-level", options.level.as_str())
            .flag_value("-crf", options.crf.to_string())
            .flag_value("-preset", options.preset.as_str())
            .flag_value("-c:a", options.audio_codec.as_str())
            .flag_value("-b:a", options.audio_bitrate.as_str());
        if options.faststart {
            builder.flag_value("-movflags", "+faststart")
        } else {
            builder
        }
    }

    #[must_use]
    pub fn output(self, path: &Path) -> Self {
        self.arg(path.as_os_str())
    }

    #[must_use]
    pub fn build(self) -> Vec<OsString> {
        self.args
    }
}
