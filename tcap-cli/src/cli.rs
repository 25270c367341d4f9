// tcap-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tcap_core::config::{
    DEFAULT_AUDIO_BITRATE, DEFAULT_STILL_DURATION_SECS, DEFAULT_VIDEO_QUALITY, MAX_VIDEO_QUALITY,
};
use tcap_core::CoreError;

use crate::error::CliResult;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "tcap",
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Append a still image to the end of a video to aid thumbnail selection",
    long_about = "Appends a short still segment (default 0.3s) showing a PNG to the end of a \
                  video, re-encoding through ffmpeg so the last frame can be picked as thumbnail."
)]
#[command(group(ArgGroup::new("mode").args(["pair", "video", "info"])))]
pub struct Cli {
    /// Pair mode: provide a video; the image is inferred as <stem>.png
    #[arg(long, value_name = "VIDEO")]
    pub pair: Option<PathBuf>,

    /// Explicit video path (use with -t/--thumb)
    #[arg(short = 'v', long = "video", value_name = "VIDEO")]
    pub video: Option<PathBuf>,

    /// Show install details and version information, then exit
    #[arg(long)]
    pub info: bool,

    /// Explicit image path (required with -v/--video)
    #[arg(short = 't', long = "thumb", value_name = "IMAGE")]
    pub thumb: Option<PathBuf>,

    /// Output path (default: <stem>_thumb.<ext> next to the video)
    #[arg(short = 'o', long = "out", value_name = "OUTPUT")]
    pub out: Option<PathBuf>,

    /// Still duration in seconds
    #[arg(short = 'd', long = "duration", value_name = "SECONDS", default_value_t = DEFAULT_STILL_DURATION_SECS)]
    pub duration: f64,

    /// x264 CRF quality (lower = higher quality, larger files)
    #[arg(
        long,
        value_name = "CRF",
        default_value_t = DEFAULT_VIDEO_QUALITY,
        value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_VIDEO_QUALITY))
    )]
    pub crf: u8,

    /// AAC audio bitrate for the output
    #[arg(long = "audio-bitrate", value_name = "BITRATE", default_value = DEFAULT_AUDIO_BITRATE)]
    pub audio_bitrate: String,

    /// Overwrite the original video (atomic replace in the same folder)
    #[arg(long)]
    pub inplace: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Info,
    Append { video: PathBuf, image: PathBuf },
    /// No mode flag given
    Help,
}

impl Cli {
    /// Resolves pair/explicit/info mode into concrete inputs.
    pub fn mode(&self) -> CliResult<Mode> {
        if self.info {
            return Ok(Mode::Info);
        }

        if let Some(video) = &self.pair {
            if self.thumb.is_some() {
                log::warn!("-t/--thumb is ignored in pair mode");
            }
            return Ok(Mode::Append {
                video: video.clone(),
                image: video.with_extension("png"),
            });
        }

        match (&self.video, &self.thumb) {
            (Some(video), Some(image)) => Ok(Mode::Append {
                video: video.clone(),
                image: image.clone(),
            }),
            (Some(_), None) => Err(CoreError::OperationFailed(
                "When using -v/--video you must also pass -t/--thumb.".to_string(),
            )),
            (None, _) => Ok(Mode::Help),
        }
    }
}
