// tcap-cli/src/main.rs
//
// Entry point for the tcap binary: parse arguments, set up logging, run the
// selected mode, and map any error to exit status 1.

use clap::Parser;
use std::process;
use tcap_cli::logging::init_logging;
use tcap_cli::output::print_error;
use tcap_cli::{Cli, run};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        log::debug!("Exiting after error: {e:?}");
        print_error(&e.to_string());
        process::exit(1);
    }
}
