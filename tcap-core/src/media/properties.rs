//! Structure for source video metadata.
//!
//! `MediaProperties` is produced once per source video by the prober and
//! consumed by the segment planner to size and pace the still segment.

use crate::config::FALLBACK_FRAME_RATE;

/// Source video metadata needed to build a matching still segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaProperties {
    /// Width of the first video stream in pixels
    pub width: u32,

    /// Height of the first video stream in pixels
    pub height: u32,

    /// Average frame rate of the first video stream
    pub frame_rate: f64,

    /// Container duration in seconds; 0.0 when it could not be probed
    pub duration: f64,

    /// Whether the container holds any audio stream
    pub has_audio: bool,
}

/// Parses an ffprobe rational such as `"30000/1001"` into frames per second.
///
/// Anything unusable (zero denominator, garbage, non-positive result) yields
/// exactly [`FALLBACK_FRAME_RATE`]. A bare number is taken as-is.
#[must_use]
pub fn parse_frame_rate(raw: &str) -> f64 {
    let raw = raw.trim();
    let parsed = match raw.split_once('/') {
        Some((num, den)) => match (num.trim().parse::<f64>(), den.trim().parse::<f64>()) {
            (Ok(num), Ok(den)) if den != 0.0 => Some(num / den),
            _ => None,
        },
        None => raw.parse::<f64>().ok(),
    };

    match parsed {
        Some(fps) if fps.is_finite() && fps > 0.0 => fps,
        _ => {
            log::debug!("Unusable frame rate {raw:?}, assuming {FALLBACK_FRAME_RATE}");
            FALLBACK_FRAME_RATE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ntsc_frame_rate() {
        let fps = parse_frame_rate("30000/1001");
        assert!((fps - 29.97).abs() < 0.001, "got {fps}");
    }

    #[test]
    fn test_parse_integer_rational() {
        assert_eq!(parse_frame_rate("25/1"), 25.0);
        assert_eq!(parse_frame_rate("60"), 60.0);
    }

    #[test]
    fn test_zero_denominator_falls_back() {
        assert_eq!(parse_frame_rate("0/0"), 30.0);
        assert_eq!(parse_frame_rate("24/0"), 30.0);
    }

    #[test]
    fn test_garbage_falls_back() {
        assert_eq!(parse_frame_rate(""), 30.0);
        assert_eq!(parse_frame_rate("abc"), 30.0);
        assert_eq!(parse_frame_rate("x/y"), 30.0);
        assert_eq!(parse_frame_rate("-30/1"), 30.0);
    }
}
