// ============================================================================
// tcap-core/src/media/probe.rs
// ============================================================================
//
// MEDIA PROBER: Source Video Property Detection
//
// Three independent ffprobe queries feed one MediaProperties value:
//
// 1. First video stream width/height/avg_frame_rate (JSON). Required; any
//    failure here is fatal and reported as UnreadableStream.
// 2. Container duration (plain scalar). Best-effort, falls back to 0.0.
// 3. Audio stream presence (JSON). Best-effort, falls back to false.
//
// The fallbacks are a deliberate leniency: they only shape the synthesized
// silence, so a degraded probe still produces a well-formed render.

use crate::error::{CoreError, CoreResult, InputKind, not_found_error};
use crate::external::FfprobeExecutor;
use crate::media::properties::{MediaProperties, parse_frame_rate};
use serde::Deserialize;
use std::ffi::OsString;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct StreamList<T> {
    #[serde(default = "Vec::new")]
    streams: Vec<T>,
}

impl<T> Default for StreamList<T> {
    fn default() -> Self {
        Self { streams: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
struct VideoStreamEntry {
    width: Option<i64>,
    height: Option<i64>,
    avg_frame_rate: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AudioStreamEntry {
    #[allow(dead_code)]
    index: Option<i64>,
}

/// Width, height and frame rate of the first video stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoStreamInfo {
    pub width: u32,
    pub height: u32,
    pub frame_rate: f64,
}

fn with_input(args: &[&str], path: &Path) -> Vec<OsString> {
    args.iter()
        .map(OsString::from)
        .chain(std::iter::once(path.as_os_str().to_os_string()))
        .collect()
}

pub(crate) fn video_stream_args(path: &Path) -> Vec<OsString> {
    with_input(
        &[
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-show_entries",
            "stream=width,height,avg_frame_rate",
            "-of",
            "json",
        ],
        path,
    )
}

pub(crate) fn duration_args(path: &Path) -> Vec<OsString> {
    with_input(
        &[
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=nw=1:nk=1",
        ],
        path,
    )
}

pub(crate) fn audio_stream_args(path: &Path) -> Vec<OsString> {
    with_input(
        &[
            "-v",
            "error",
            "-select_streams",
            "a",
            "-show_entries",
            "stream=index",
            "-of",
            "json",
        ],
        path,
    )
}

/// Parses the JSON answer of the video stream query.
pub fn parse_video_stream(json: &str) -> Result<VideoStreamInfo, String> {
    let trimmed = json.trim();
    let list: StreamList<VideoStreamEntry> = if trimmed.is_empty() {
        StreamList::default()
    } else {
        serde_json::from_str(trimmed).map_err(|e| format!("invalid ffprobe JSON: {e}"))?
    };

    let stream = list
        .streams
        .into_iter()
        .next()
        .ok_or_else(|| "no video stream found".to_string())?;

    let width = stream.width.ok_or_else(|| "video stream missing width".to_string())?;
    let height = stream
        .height
        .ok_or_else(|| "video stream missing height".to_string())?;

    if width <= 0 || height <= 0 || width > i64::from(u32::MAX) || height > i64::from(u32::MAX) {
        return Err(format!("invalid dimensions: width={width}, height={height}"));
    }

    let frame_rate = parse_frame_rate(stream.avg_frame_rate.as_deref().unwrap_or("30/1"));

    Ok(VideoStreamInfo {
        width: width as u32,
        height: height as u32,
        frame_rate,
    })
}

/// Parses the scalar answer of the duration query.
pub fn parse_duration(output: &str) -> Option<f64> {
    output
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
}

/// Parses the JSON answer of the audio query. An empty stream list means no audio.
pub fn parse_has_audio(json: &str) -> Result<bool, serde_json::Error> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Ok(false);
    }
    let list: StreamList<AudioStreamEntry> = serde_json::from_str(trimmed)?;
    Ok(!list.streams.is_empty())
}

/// Probes `path` for the properties needed to plan a render.
pub fn probe_media<E>(executor: &E, path: &Path) -> CoreResult<MediaProperties>
where
    E: FfprobeExecutor + ?Sized,
{
    if !path.exists() {
        return Err(not_found_error(InputKind::Video, path));
    }

    let stream_json = executor
        .query(&video_stream_args(path))
        .map_err(|e| CoreError::UnreadableStream {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let stream = parse_video_stream(&stream_json).map_err(|reason| CoreError::UnreadableStream {
        path: path.to_path_buf(),
        reason,
    })?;

    let duration = match executor.query(&duration_args(path)) {
        Ok(output) => parse_duration(&output).unwrap_or_else(|| {
            log::warn!(
                "Could not parse duration {:?} for {}, assuming 0",
                output.trim(),
                path.display()
            );
            0.0
        }),
        Err(e) => {
            log::warn!("Duration probe failed for {}: {e}", path.display());
            0.0
        }
    };

    let has_audio = match executor.query(&audio_stream_args(path)) {
        Ok(output) => parse_has_audio(&output).unwrap_or_else(|e| {
            log::warn!("Could not parse audio probe for {}: {e}", path.display());
            false
        }),
        Err(e) => {
            log::warn!("Audio probe failed for {}: {e}", path.display());
            false
        }
    };

    let properties = MediaProperties {
        width: stream.width,
        height: stream.height,
        frame_rate: stream.frame_rate,
        duration,
        has_audio,
    };
    log::debug!("Probed {}: {properties:?}", path.display());
    Ok(properties)
}
