//! Utility functions for formatting and command-line rendering.
//!
//! This module provides general-purpose helpers used throughout the
//! tcap-core library: ffmpeg time parsing, duration formatting, and
//! shell-style quoting of command lines for error messages.

use std::ffi::OsStr;

/// Formats seconds as HH:MM:SS.mmm (e.g., 10.3 -> "00:00:10.300"). Returns "??:??:??" for invalid inputs.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??".to_string();
    }

    let total_millis = (seconds * 1000.0).round() as u64;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let secs = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;
    format!("{hours:02}:{minutes:02}:{secs:02}.{millis:03}")
}

/// Parses FFmpeg time string (HH:MM:SS.MS) to seconds. Returns None if invalid.
#[must_use]
pub fn parse_ffmpeg_time(time: &str) -> Option<f64> {
    let time = time.trim();
    if time.starts_with('-') {
        return None;
    }
    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() == 3 {
        let hours = parts[0].parse::<f64>().ok()?;
        let minutes = parts[1].parse::<f64>().ok()?;
        let seconds = parts[2].parse::<f64>().ok()?;
        Some(hours * 3600.0 + minutes * 60.0 + seconds)
    } else {
        None
    }
}

/// Quotes a single argument the way a POSIX shell would need it.
#[must_use]
pub fn quote_arg(arg: &str) -> String {
    let is_safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c));
    if is_safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\"'\"'"))
    }
}

/// Renders a program and its arguments as a copy-pasteable command line.
#[must_use]
pub fn quote_command<S: AsRef<OsStr>>(program: impl AsRef<OsStr>, args: &[S]) -> String {
    std::iter::once(program.as_ref())
        .chain(args.iter().map(AsRef::as_ref))
        .map(|part| quote_arg(&part.to_string_lossy()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(10.3), "00:00:10.300");
        assert_eq!(format_duration(3725.0), "01:02:05.000");
        assert_eq!(format_duration(-1.0), "??:??:??");
        assert_eq!(format_duration(f64::NAN), "??:??:??");
    }

    #[test]
    fn test_parse_ffmpeg_time() {
        assert!((parse_ffmpeg_time("00:00:10.30").unwrap() - 10.3).abs() < 1e-9);
        assert_eq!(parse_ffmpeg_time("01:02:05.00"), Some(3725.0));
        assert_eq!(parse_ffmpeg_time("N/A"), None);
        assert_eq!(parse_ffmpeg_time("-00:00:00.02"), None);
    }

    #[test]
    fn test_quote_arg() {
        assert_eq!(quote_arg("-crf"), "-crf");
        assert_eq!(quote_arg("/tmp/a b.mp4"), "'/tmp/a b.mp4'");
        assert_eq!(quote_arg("[v]"), "'[v]'");
        assert_eq!(quote_arg("it's"), "'it'\"'\"'s'");
        assert_eq!(quote_arg(""), "''");
    }

    #[test]
    fn test_quote_command() {
        let line = quote_command("ffmpeg", &["-i", "my clip.mp4", "-map", "[v]"]);
        assert_eq!(line, "ffmpeg -i 'my clip.mp4' -map '[v]'");
    }
}
