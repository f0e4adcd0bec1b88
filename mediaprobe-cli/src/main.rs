// mediaprobe-cli/src/main.rs
//
// Entry point for the mediaprobe binary.
//
// Responsibilities:
// - Parsing command-line arguments.
// - Setting up logging.
// - Dispatching to the command implementation.
// - Mapping the outcome to the process exit code: 0 when a duration was
//   printed, 1 when it could not be determined, 2 for usage errors (clap).

use anyhow::Context;
use clap::Parser;
use mediaprobe_cli::{Cli, Commands, logging, run_duration};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Duration(args) => match run_duration(&args) {
            Some(rendered) => {
                writeln!(io::stdout(), "{rendered}")
                    .context("failed to write duration to stdout")?;
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!(
                    "duration could not be determined for {}",
                    args.file.display()
                );
                Ok(ExitCode::FAILURE)
            }
        },
    }
}
