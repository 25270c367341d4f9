// tcap-cli/src/lib.rs
//
// Library portion of the tcap CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

use clap::CommandFactory;

pub use cli::{Cli, Mode};
pub use commands::append::run_append;
pub use commands::info::run_info;
pub use error::CliResult;

/// Dispatches a parsed command line.
pub fn run(cli: &Cli) -> CliResult<()> {
    match cli.mode()? {
        Mode::Info => run_info(),
        Mode::Append { video, image } => run_append(cli, &video, &image),
        Mode::Help => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
