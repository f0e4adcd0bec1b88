//! Video duration probing through the mediainfo executable.
//!
//! [`MediaInfoProbe`] runs `mediainfo --Output=Video;%Duration% <file>`,
//! reads the single line it prints and turns it into a [`Duration`].
//!
//! Every operation comes in two flavours: a `*_checked` variant returning a
//! [`CoreResult`] that names the failure, and the plain variant returning an
//! `Option` that logs the failure and yields `None`.

use std::path::Path;
use std::time::Duration;

use crate::config::ProbeConfig;
use crate::error::{CoreError, CoreResult, command_failed_error};
use crate::external::{ProbeCommand, ProbeProcess, ProcessSpawner, SystemSpawner};
use crate::utils::parse_duration_millis;

/// Output template asking mediainfo for the video stream duration only.
pub const VIDEO_DURATION_OUTPUT: &str = "--Output=Video;%Duration%";

/// Determines video durations by running mediainfo.
///
/// The probe holds no mutable state; one instance can serve any number of
/// calls, and with [`SystemSpawner`] it can be shared between threads.
///
/// # Examples
///
/// ```rust,no_run
/// use mediaprobe_core::{MediaInfoProbe, ProbeConfig};
/// use std::path::Path;
///
/// let probe = MediaInfoProbe::new(ProbeConfig::default());
/// match probe.determine_video_duration(Path::new("/path/to/film.avi")) {
///     Some(duration) => println!("{} ms", duration.as_millis()),
///     None => println!("duration unknown"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MediaInfoProbe<S = SystemSpawner> {
    config: ProbeConfig,
    spawner: S,
}

impl MediaInfoProbe<SystemSpawner> {
    /// Creates a probe that spawns real processes.
    #[must_use]
    pub fn new(config: ProbeConfig) -> Self {
        Self::with_spawner(config, SystemSpawner)
    }
}

impl<S: ProcessSpawner> MediaInfoProbe<S> {
    /// Creates a probe that starts processes through `spawner`.
    pub fn with_spawner(config: ProbeConfig, spawner: S) -> Self {
        Self { config, spawner }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Builds the mediainfo command for `path`, made absolute against the
    /// current directory. The file is not required to exist.
    pub fn video_duration_command(&self, path: &Path) -> CoreResult<ProbeCommand> {
        let absolute =
            std::path::absolute(path).map_err(|e| CoreError::InvalidPath(path.to_path_buf(), e))?;

        Ok(ProbeCommand::new(self.config.executable())
            .arg(VIDEO_DURATION_OUTPUT)
            .arg(absolute))
    }

    /// Determines the duration of the first video stream in `path`.
    ///
    /// Returns `None` if it cannot be determined for any reason; the reason
    /// is logged.
    pub fn determine_video_duration(&self, path: &Path) -> Option<Duration> {
        match self.probe_video_duration(path) {
            Ok(duration) => Some(duration),
            Err(err) => {
                log_failure(&err);
                None
            }
        }
    }

    /// Like [`determine_video_duration`](Self::determine_video_duration), but
    /// reports why the duration could not be determined.
    pub fn probe_video_duration(&self, path: &Path) -> CoreResult<Duration> {
        let command = self.video_duration_command(path)?;
        let output = self.execute_command_checked(&command)?;
        let duration = parse_duration_millis(&output)?;

        log::debug!(
            "Duration of {}: {} ms",
            path.display(),
            duration.as_millis()
        );
        Ok(duration)
    }

    /// Runs `command` and returns the first line of its standard output, or
    /// `None` if it could not be run, exited unsuccessfully or its output
    /// could not be read. Failures are logged.
    pub fn execute_command(&self, command: &ProbeCommand) -> Option<String> {
        match self.execute_command_checked(command) {
            Ok(line) => Some(line),
            Err(err) => {
                log_failure(&err);
                None
            }
        }
    }

    /// Runs `command`, waits for it to terminate and, if it exited with
    /// status 0, returns the first line of its standard output. Later lines
    /// are never read.
    pub fn execute_command_checked(&self, command: &ProbeCommand) -> CoreResult<String> {
        log::debug!("Running: {}", command);

        // The process handle is dropped, and its pipes closed, on every
        // return path below.
        let mut process = self.spawner.spawn(command)?;

        match process.wait(self.config.timeout())? {
            Some(0) => {}
            code => return Err(command_failed_error(command.to_string(), code)),
        }

        process
            .read_first_line()?
            .ok_or_else(|| CoreError::EmptyOutput(command.to_string()))
    }
}

fn log_failure(err: &CoreError) {
    match err {
        CoreError::CommandStart(..) | CoreError::CommandWait(..) | CoreError::OutputRead(..) => {
            log::error!("{}", err);
        }
        _ => log::warn!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::mocks::{MockProcess, MockSpawner};
    use std::io;

    const MEDIA_FILE: &str = "/path/to/film.avi";

    fn probe_with(spawner: &MockSpawner) -> MediaInfoProbe<MockSpawner> {
        MediaInfoProbe::with_spawner(ProbeConfig::new(Some("mediainfo".to_string())), spawner.clone())
    }

    fn command() -> ProbeCommand {
        ProbeCommand::new("command")
    }

    #[test]
    fn test_determines_video_duration() {
        let spawner = MockSpawner::new();
        spawner.add_process(MockProcess::exited(0, "42000\n"));
        let probe = probe_with(&spawner);

        let duration = probe.determine_video_duration(Path::new(MEDIA_FILE));

        assert_eq!(duration, Some(Duration::from_millis(42000)));
        assert_eq!(
            spawner.get_received_calls(),
            vec!["mediainfo --Output=Video;%Duration% /path/to/film.avi".to_string()]
        );
    }

    #[test]
    fn test_bare_carriage_return_ends_the_line() {
        let spawner = MockSpawner::new();
        spawner.add_process(MockProcess::exited(0, "42000\r"));
        spawner.add_process(MockProcess::exited(0, "42000\rtrailing"));
        let probe = probe_with(&spawner);

        for _ in 0..2 {
            assert_eq!(
                probe.determine_video_duration(Path::new(MEDIA_FILE)),
                Some(Duration::from_millis(42000))
            );
        }
    }

    #[test]
    fn test_relative_path_is_made_absolute() {
        let spawner = MockSpawner::new();
        let probe = probe_with(&spawner);

        let command = probe.video_duration_command(Path::new("film.avi")).unwrap();
        let expected = std::env::current_dir().unwrap().join("film.avi");

        assert_eq!(command.args()[1], expected.into_os_string());
    }

    #[test]
    fn test_none_when_command_yields_nothing() {
        let spawner = MockSpawner::new();
        spawner.add_spawn_error(io::ErrorKind::NotFound);
        let probe = probe_with(&spawner);

        assert_eq!(probe.determine_video_duration(Path::new(MEDIA_FILE)), None);
    }

    #[test]
    fn test_none_when_output_is_not_a_number() {
        let spawner = MockSpawner::new();
        spawner.add_process(MockProcess::exited(0, "something\n"));
        let probe = probe_with(&spawner);

        assert_eq!(probe.determine_video_duration(Path::new(MEDIA_FILE)), None);

        spawner.add_process(MockProcess::exited(0, "something\n"));
        let err = probe.probe_video_duration(Path::new(MEDIA_FILE)).unwrap_err();
        assert!(matches!(err, CoreError::DurationParse(text) if text == "something"));
    }

    #[test]
    fn test_none_when_output_is_empty() {
        let spawner = MockSpawner::new();
        spawner.add_process(MockProcess::exited(0, ""));
        spawner.add_process(MockProcess::exited(0, "\n"));
        let probe = probe_with(&spawner);

        assert!(matches!(
            probe.probe_video_duration(Path::new(MEDIA_FILE)),
            Err(CoreError::EmptyOutput(_))
        ));
        assert!(matches!(
            probe.probe_video_duration(Path::new(MEDIA_FILE)),
            Err(CoreError::DurationParse(text)) if text.is_empty()
        ));
    }

    #[test]
    fn test_execute_command_none_on_non_zero_exit() {
        let spawner = MockSpawner::new();
        let process = MockProcess::exited(-1, "42000\n");
        let reads = process.reads.clone();
        spawner.add_process(process);
        let probe = probe_with(&spawner);

        assert_eq!(probe.execute_command(&command()), None);
        // Output of a failed run is never looked at.
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn test_execute_command_checked_reports_exit_code() {
        let spawner = MockSpawner::new();
        spawner.add_process(MockProcess::exited(2, ""));
        spawner.add_process(MockProcess::signalled());
        let probe = probe_with(&spawner);

        assert!(matches!(
            probe.execute_command_checked(&command()),
            Err(CoreError::CommandFailed { code: Some(2), .. })
        ));
        assert!(matches!(
            probe.execute_command_checked(&command()),
            Err(CoreError::CommandFailed { code: None, .. })
        ));
    }

    #[test]
    fn test_execute_command_none_on_stdout_io_error() {
        let spawner = MockSpawner::new();
        spawner.add_process(MockProcess::failing_stdout(io::ErrorKind::BrokenPipe));
        let probe = probe_with(&spawner);

        assert_eq!(probe.execute_command(&command()), None);
    }

    #[test]
    fn test_execute_command_none_on_interrupted_wait() {
        let spawner = MockSpawner::new();
        spawner.add_process(MockProcess::wait_error(io::ErrorKind::Interrupted));
        let probe = probe_with(&spawner);

        assert_eq!(probe.execute_command(&command()), None);
    }

    #[test]
    fn test_execute_command_returns_first_line_only() {
        let spawner = MockSpawner::new();
        spawner.add_process(MockProcess::exited(0, "result\nsecond line\nthird\n"));
        let probe = probe_with(&spawner);

        assert_eq!(probe.execute_command(&command()).as_deref(), Some("result"));
        assert_eq!(spawner.get_received_calls(), vec!["command".to_string()]);
    }

    #[test]
    fn test_repeated_calls_give_identical_results() {
        let spawner = MockSpawner::new();
        spawner.add_process(MockProcess::exited(0, "1234\n"));
        spawner.add_process(MockProcess::exited(0, "1234\n"));
        let probe = probe_with(&spawner);

        let first = probe.determine_video_duration(Path::new(MEDIA_FILE));
        let second = probe.determine_video_duration(Path::new(MEDIA_FILE));

        assert_eq!(first, Some(Duration::from_millis(1234)));
        assert_eq!(first, second);
        let calls = spawner.get_received_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }
}
