// ============================================================================
// mediaprobe-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for Probing
//
// This module defines the error types used internally by mediaprobe-core.
// Every way a probe can fail has its own variant so that each branch can be
// logged and tested on its own. The public `Option` returning operations in
// `probe` collapse these into absence at the outermost boundary.
//
// KEY COMPONENTS:
// - CoreError: Enum of every probe failure mode
// - CoreResult: Type alias for Result with CoreError
// - Helper functions for building common command errors

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while running mediainfo and interpreting its output.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The process could not be created (missing executable, permissions...).
    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] std::io::Error),

    /// Waiting for the process to terminate failed.
    #[error("Failed waiting for command '{0}': {1}")]
    CommandWait(String, #[source] std::io::Error),

    /// The process did not finish within the configured timeout and was killed.
    #[error("Command '{0}' timed out after {1:?}")]
    CommandTimeout(String, Duration),

    /// The process terminated with a non-zero exit status, or was killed by a
    /// signal (`None`).
    #[error("Command '{command}' exited with status {}", format_exit_code(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// Reading the process's standard output failed.
    #[error("Failed to read output of '{0}': {1}")]
    OutputRead(String, #[source] std::io::Error),

    /// The process succeeded but wrote nothing to standard output.
    #[error("Command '{0}' produced no output")]
    EmptyOutput(String),

    /// The captured text is not a whole number of milliseconds.
    #[error("'{0}' is not a valid duration")]
    DurationParse(String),

    /// The target path could not be made absolute.
    #[error("Invalid path {0:?}: {1}")]
    InvalidPath(PathBuf, #[source] std::io::Error),
}

/// Result type for probe operations.
pub type CoreResult<T> = Result<T, CoreError>;

fn format_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "<terminated by signal>".to_string(),
    }
}

/// Builds a [`CoreError::CommandStart`] for the given command.
pub fn command_start_error(command: impl Into<String>, err: std::io::Error) -> CoreError {
    CoreError::CommandStart(command.into(), err)
}

/// Builds a [`CoreError::CommandWait`] for the given command.
pub fn command_wait_error(command: impl Into<String>, err: std::io::Error) -> CoreError {
    CoreError::CommandWait(command.into(), err)
}

/// Builds a [`CoreError::CommandFailed`] for the given command and exit code.
pub fn command_failed_error(command: impl Into<String>, code: Option<i32>) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        code,
    }
}
