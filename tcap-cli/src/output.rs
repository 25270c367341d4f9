//! User-facing terminal output.
//!
//! Every line carries the `[tcap]` prefix. Results go to stdout, errors to
//! stderr; styling is dropped automatically when the stream is not a terminal.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;
use std::path::Path;
use std::time::Duration;
use tcap_core::format_duration;

const PREFIX: &str = "[tcap]";

pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{PREFIX} {}: {value}", style(label).cyan());
}

pub fn print_done(path: &Path) {
    println!("{PREFIX} {} {}", style("Done:").green().bold(), path.display());
}

pub fn print_updated_in_place(path: &Path) {
    println!(
        "{PREFIX} {} {}",
        style("Updated in place:").green().bold(),
        path.display()
    );
}

pub fn print_error(message: &str) {
    eprintln!("{PREFIX} {} {message}", style("ERROR:").red().bold());
}

/// Spinner showing how much output ffmpeg has written so far.
///
/// Drawn on stderr and hidden when stderr is not a terminal.
pub fn create_render_spinner(label: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let template = ProgressStyle::with_template("{spinner:.green} {prefix} {msg} ({elapsed})")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(template);
    pb.set_prefix(label.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Spinner message after `processed_secs` of output.
#[must_use]
pub fn render_progress_message(processed_secs: f64) -> String {
    format!("{} written", format_duration(processed_secs))
}
