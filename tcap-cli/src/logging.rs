// ============================================================================
// tcap-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger backend for the `log` facade
//
// USAGE:
// - default: info
// - --verbose: debug
// - RUST_LOG, when set, overrides both

use console::style;
use env_logger::Env;
use log::LevelFilter;
use std::io::Write;

/// Default filter for the given verbosity.
#[must_use]
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger. Safe to call once per process.
pub fn init_logging(verbose: bool) {
    let level = default_level(verbose);
    let env = Env::default().default_filter_or(level.as_str().to_ascii_lowercase());

    let result = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let level = match record.level() {
                log::Level::Error => style("ERROR").red().bold(),
                log::Level::Warn => style("WARN ").yellow(),
                log::Level::Info => style("INFO ").green(),
                log::Level::Debug => style("DEBUG").blue(),
                log::Level::Trace => style("TRACE").magenta(),
            };
            writeln!(buf, "{} {} {}", buf.timestamp(), level, record.args())
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized with default level: {level}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), LevelFilter::Info);
        assert_eq!(default_level(true), LevelFilter::Debug);
    }
}
