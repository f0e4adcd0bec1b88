// mediaprobe-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mediaprobe: video duration probe",
    long_about = "Reports the video stream duration of a media file using mediainfo."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints the video duration of a media file
    Duration(DurationArgs),
}

#[derive(Parser, Debug)]
pub struct DurationArgs {
    /// Media file to probe
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,

    /// mediainfo executable name or path. Overrides MEDIAPROBE_MEDIAINFO
    /// (defaults to `mediainfo` on PATH)
    #[arg(long, value_name = "PATH")]
    pub mediainfo: Option<String>,

    /// Kill mediainfo if it runs longer than this many seconds.
    /// Overrides MEDIAPROBE_TIMEOUT_SECS
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// How to print the duration
    #[arg(long, value_enum, default_value_t = OutputFormat::Ms)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Whole milliseconds, e.g. 42000
    Ms,
    /// HH:MM:SS.mmm, e.g. 00:00:42.000
    Human,
}
