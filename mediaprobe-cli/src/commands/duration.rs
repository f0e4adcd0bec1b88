// mediaprobe-cli/src/commands/duration.rs
//
// Implements the `duration` command: builds a probe from the arguments and
// prints the duration of one file.

use crate::cli::{DurationArgs, OutputFormat};
use mediaprobe_core::{MediaInfoProbe, ProbeConfig, format_duration};
use std::time::Duration;

/// Builds the probe configuration from the MEDIAPROBE_* environment
/// variables, then applies the explicit flags on top.
pub fn build_config(args: &DurationArgs) -> ProbeConfig {
    apply_args(ProbeConfig::from_env(), args)
}

fn apply_args(mut config: ProbeConfig, args: &DurationArgs) -> ProbeConfig {
    if let Some(executable) = &args.mediainfo {
        config = config.with_executable(executable.clone());
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}

/// Renders a duration in the requested format.
pub fn render(duration: Duration, format: OutputFormat) -> String {
    match format {
        OutputFormat::Ms => duration.as_millis().to_string(),
        OutputFormat::Human => format_duration(duration),
    }
}

/// Runs the probe. Returns the rendered duration, or `None` if it could not
/// be determined.
pub fn run_duration(args: &DurationArgs) -> Option<String> {
    let config = build_config(args);
    log::debug!(
        "Probing {} with '{}' (timeout: {:?})",
        args.file.display(),
        config.executable(),
        config.timeout()
    );

    let probe = MediaInfoProbe::new(config);
    probe
        .determine_video_duration(&args.file)
        .map(|duration| render(duration, args.format))
}
