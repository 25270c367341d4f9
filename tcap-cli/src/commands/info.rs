//! `--info`: version and environment details.

use std::env;
use std::path::PathBuf;

use crate::error::{CliErrorContext, CliResult};
use crate::output::print_info;

/// Environment variable that overrides the reported version.
pub const VERSION_ENV: &str = "TCAP_CLI_VERSION";

const NOT_ON_PATH: &str = "not on PATH";

/// Reported version: `TCAP_CLI_VERSION` if set and non-empty, else the crate version.
#[must_use]
pub fn version() -> String {
    env::var(VERSION_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
}

fn tool_location(name: &str) -> String {
    which::which(name).map_or_else(|_| NOT_ON_PATH.to_string(), |p| p.display().to_string())
}

pub fn run_info() -> CliResult<()> {
    let entry = env::current_exe().cli_context("Cannot locate the tcap executable")?;
    let install_dir = entry.parent().map(PathBuf::from).unwrap_or_default();

    print_info("Version", version());
    print_info("Entry point", entry.display());
    print_info("Install dir", install_dir.display());
    print_info("ffmpeg", tool_location("ffmpeg"));
    print_info("ffprobe", tool_location("ffprobe"));
    Ok(())
}
