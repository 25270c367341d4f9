// ============================================================================
// tcap-cli/src/commands/append.rs
// ============================================================================
//
// APPEND COMMAND: Maps CLI arguments onto tcap-core and reports the result.

use std::path::Path;

use tcap_core::{AppendRequest, FfmpegEngine, ThumbnailConfigBuilder, append_thumbnail};

use crate::cli::Cli;
use crate::error::CliResult;
use crate::output::{
    create_render_spinner, print_done, print_updated_in_place, render_progress_message,
};

/// Builds the core request for `video` + `image` from the parsed arguments.
pub fn build_request(cli: &Cli, video: &Path, image: &Path) -> CliResult<AppendRequest> {
    let config = ThumbnailConfigBuilder::new()
        .still_duration_secs(cli.duration)
        .video_quality(cli.crf)
        .audio_bitrate(cli.audio_bitrate.clone())
        .in_place(cli.inplace)
        .build()?;

    Ok(AppendRequest::new(video, image)
        .with_output(cli.out.clone())
        .with_config(config))
}

/// Runs one append and prints the final line.
pub fn run_append(cli: &Cli, video: &Path, image: &Path) -> CliResult<()> {
    let request = build_request(cli, video, image)?;
    log::debug!("Append request: {request:?}");

    let engine = FfmpegEngine::new();
    let spinner = create_render_spinner("Rendering");
    let result = append_thumbnail(&engine, &request, &mut |secs| {
        spinner.set_message(render_progress_message(secs));
    });
    spinner.finish_and_clear();

    let outcome = result?;
    if outcome.in_place {
        print_updated_in_place(&outcome.output_path);
    } else {
        print_done(&outcome.output_path);
    }
    Ok(())
}
