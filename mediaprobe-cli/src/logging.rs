// ============================================================================
// mediaprobe-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Initialisation
//
// The library logs through the `log` facade; this module installs env_logger
// as the backend for the binary.
//
// USAGE:
// - default: warnings and errors only, so stdout carries just the duration
// - --verbose: debug output (command lines, parsed durations)
// - RUST_LOG=<filter>: overrides both

use log::LevelFilter;

/// Returns the default level for the given verbosity flag.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialises env_logger on stderr. Safe to call more than once.
pub fn init(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level(verbose))
        .parse_default_env()
        .format_target(false)
        .target(env_logger::Target::Stderr);

    if let Err(e) = builder.try_init() {
        eprintln!("Logger already initialised: {e}");
    }
}
