//! Configuration structures and constants for the tcap-core library.
//!
//! This module holds the user-tunable options of an append run (still
//! duration, quality, audio bitrate, in-place mode) along with the fixed
//! encoding constants used for maximum playback compatibility.

mod builder;

pub use builder::ThumbnailConfigBuilder;

use crate::error::{CoreError, CoreResult};

// Default constants

/// Default length of the appended still segment, in seconds.
pub const DEFAULT_STILL_DURATION_SECS: f64 = 0.3;

/// Default x264 CRF quality. Lower values produce higher quality but larger files.
pub const DEFAULT_VIDEO_QUALITY: u8 = 18;

/// Highest CRF value accepted by libx264 for 8-bit output.
pub const MAX_VIDEO_QUALITY: u8 = 51;

/// Default AAC bitrate for the output audio track.
pub const DEFAULT_AUDIO_BITRATE: &str = "192k";

/// x264 speed preset.
pub const DEFAULT_ENCODER_PRESET: &str = "medium";

/// H.264 profile and level chosen for broad device compatibility.
pub const H264_PROFILE: &str = "high";
pub const H264_LEVEL: &str = "4.1";

pub const VIDEO_CODEC: &str = "libx264";
pub const AUDIO_CODEC: &str = "aac";
pub const PIXEL_FORMAT: &str = "yuv420p";

/// Sample rate used for resampled and synthesized audio.
pub const SILENCE_SAMPLE_RATE: u32 = 48_000;

/// Channel layout used for resampled and synthesized audio.
pub const SILENCE_CHANNEL_LAYOUT: &str = "stereo";

/// Frame rate assumed when ffprobe reports something unusable.
pub const FALLBACK_FRAME_RATE: f64 = 30.0;

/// Suffix appended to the source stem for the default output name.
pub const OUTPUT_SUFFIX: &str = "_thumb";

/// Extension used when the source has none.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "mp4";

/// Options controlling a single append run.
///
/// Usually built with [`ThumbnailConfigBuilder`]; `Default` yields the same
/// values the CLI uses when no flags are given.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailConfig {
    /// Length of the appended still segment, in seconds
    pub still_duration_secs: f64,

    /// x264 CRF value
    pub video_quality: u8,

    /// AAC bitrate token passed straight to ffmpeg (e.g. "192k")
    pub audio_bitrate: String,

    /// Replace the source file instead of writing a new one
    pub in_place: bool,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            still_duration_secs: DEFAULT_STILL_DURATION_SECS,
            video_quality: DEFAULT_VIDEO_QUALITY,
            audio_bitrate: DEFAULT_AUDIO_BITRATE.to_string(),
            in_place: false,
        }
    }
}

impl ThumbnailConfig {
    /// Checks the option values before any file is touched.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.still_duration_secs.is_finite() || self.still_duration_secs <= 0.0 {
            return Err(CoreError::Config(format!(
                "still duration must be a positive number of seconds, got {}",
                self.still_duration_secs
            )));
        }

        if self.video_quality > MAX_VIDEO_QUALITY {
            return Err(CoreError::Config(format!(
                "CRF must be between 0 and {MAX_VIDEO_QUALITY}, got {}",
                self.video_quality
            )));
        }

        let bitrate = self.audio_bitrate.trim();
        if bitrate.is_empty() || bitrate.chars().any(char::is_whitespace) {
            return Err(CoreError::Config(format!(
                "audio bitrate must be a single token such as \"192k\", got {:?}",
                self.audio_bitrate
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ThumbnailConfig::default();
        assert_eq!(config.still_duration_secs, 0.3);
        assert_eq!(config.video_quality, 18);
        assert_eq!(config.audio_bitrate, "192k");
        assert!(!config.in_place);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = ThumbnailConfig {
                still_duration_secs: bad,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(CoreError::Config(_))),
                "duration {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_out_of_range_crf() {
        let config = ThumbnailConfig {
            video_quality: 52,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ThumbnailConfig {
            video_quality: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_blank_bitrate() {
        for bad in ["", "   ", "192 k"] {
            let config = ThumbnailConfig {
                audio_bitrate: bad.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "bitrate {bad:?} should be rejected");
        }
    }
}
