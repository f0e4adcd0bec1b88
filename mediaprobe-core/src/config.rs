// ============================================================================
// mediaprobe-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Probe Configuration and Constants
//
// This module defines the immutable configuration shared by every probe call:
// which executable to run and, optionally, how long to wait for it.
//
// USAGE:
// A ProbeConfig is created once by the consumer (the CLI, or any embedding
// application), handed to MediaInfoProbe, and then only ever read.

use std::env;
use std::time::Duration;

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Executable used when none is configured. Resolved through `PATH`.
pub const DEFAULT_MEDIAINFO_EXECUTABLE: &str = "mediainfo";

/// Environment variable overriding the mediainfo executable.
pub const ENV_MEDIAINFO_EXECUTABLE: &str = "MEDIAPROBE_MEDIAINFO";

/// Environment variable setting the wait timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "MEDIAPROBE_TIMEOUT_SECS";

// ============================================================================
// PROBE CONFIGURATION
// ============================================================================

/// Configuration for [`MediaInfoProbe`](crate::MediaInfoProbe).
///
/// # Examples
///
/// ```rust
/// use mediaprobe_core::ProbeConfig;
/// use std::time::Duration;
///
/// let config = ProbeConfig::new(None).with_timeout(Duration::from_secs(30));
/// assert_eq!(config.executable(), "mediainfo");
/// assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    executable: String,
    timeout: Option<Duration>,
}

impl ProbeConfig {
    /// Creates a configuration for the given executable, falling back to
    /// `mediainfo` when `None`. The string is used verbatim.
    #[must_use]
    pub fn new(executable: Option<String>) -> Self {
        Self {
            executable: executable.unwrap_or_else(|| DEFAULT_MEDIAINFO_EXECUTABLE.to_string()),
            timeout: None,
        }
    }

    /// Builds a configuration from `MEDIAPROBE_MEDIAINFO` and
    /// `MEDIAPROBE_TIMEOUT_SECS`. Unset or empty variables leave the defaults
    /// in place; an unparseable timeout is ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let executable = env::var(ENV_MEDIAINFO_EXECUTABLE)
            .ok()
            .filter(|value| !value.is_empty());
        let mut config = Self::new(executable);

        if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
            match parse_timeout_secs(&raw) {
                Some(timeout) => config.timeout = Some(timeout),
                None if raw.is_empty() => {}
                None => log::warn!(
                    "Ignoring {}='{}': expected a positive number of seconds",
                    ENV_TIMEOUT_SECS,
                    raw
                ),
            }
        }

        config
    }

    /// Replaces the executable name or path.
    #[must_use]
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Sets how long to wait for the executable before killing it.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The executable name or path.
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// The wait timeout; `None` blocks until the process exits.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Parses a positive whole number of seconds.
fn parse_timeout_secs(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
