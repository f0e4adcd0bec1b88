//! Utility functions for parsing and formatting durations.
//!
//! mediainfo reports `%Duration%` as a whole number of milliseconds. These
//! helpers turn that text into a [`Duration`] and back into something a
//! person can read.

use crate::error::{CoreError, CoreResult};
use std::time::Duration;

/// Parses a base-10 count of milliseconds (e.g. `"42000"` -> 42s).
///
/// An optional leading `+` is accepted. Whitespace, fractions and negative
/// values are rejected with [`CoreError::DurationParse`].
pub fn parse_duration_millis(text: &str) -> CoreResult<Duration> {
    text.parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| CoreError::DurationParse(text.to_string()))
}

/// Formats a duration as `HH:MM:SS.mmm` (e.g. 3725.5s -> "01:02:05.500").
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    let millis = duration.subsec_millis();
    format!("{hours:02}:{minutes:02}:{secs:02}.{millis:03}")
}
