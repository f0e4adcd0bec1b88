// ============================================================================
// mediaprobe-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interaction with the mediainfo Executable
//
// This module encapsulates everything that touches the operating system's
// process machinery. Process creation sits behind the ProcessSpawner trait so
// the probe logic can be exercised against a fake process in tests.
//
// KEY COMPONENTS:
// - ProbeCommand: Program plus discrete argument vector (no shell involved)
// - ProbeProcess / ProcessSpawner: Traits for a running process and its factory
// - SystemSpawner: Concrete implementation on std::process
// - mocks: Fake spawner/process for tests (feature "test-mocks")

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::{self, BufRead, BufReader, Read};
use std::process::Command;
use std::time::Duration;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the std::process backed spawner
pub mod process_executor;

/// Contains fake spawner and process implementations for tests
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use process_executor::{SystemProcess, SystemSpawner};

// ============================================================================
// COMMAND REPRESENTATION
// ============================================================================

/// An external command: the program to run and its arguments.
///
/// Arguments are handed to the OS as a vector, so paths containing spaces or
/// shell metacharacters reach the program untouched. [`fmt::Display`] renders
/// the space-separated command line for logs and assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeCommand {
    program: String,
    args: Vec<OsString>,
}

impl ProbeCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Builds the `std::process::Command` equivalent. Stdio is left to the caller.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for ProbeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

// ============================================================================
// PROCESS ABSTRACTION
// ============================================================================

/// A process that has been started and not yet torn down.
pub trait ProbeProcess {
    /// Blocks until the process terminates and returns its exit code
    /// (`None` when it was terminated by a signal).
    ///
    /// With a timeout, a process still running once it elapses is killed and
    /// [`CoreError::CommandTimeout`] is returned.
    fn wait(&mut self, timeout: Option<Duration>) -> CoreResult<Option<i32>>;

    /// Reads the first line of standard output without its line terminator.
    /// Returns `Ok(None)` if the stream ends before any byte was written.
    /// Nothing past the first `\n` is consumed.
    fn read_first_line(&mut self) -> CoreResult<Option<String>>;
}

/// Something that can start a [`ProbeProcess`] for a [`ProbeCommand`].
pub trait ProcessSpawner {
    type Process: ProbeProcess;

    fn spawn(&self, command: &ProbeCommand) -> CoreResult<Self::Process>;
}

/// Reads one line from `reader`. The line ends at the first `\n`, `\r` or
/// `\r\n`, which is not included in the result.
///
/// Shared by the real and fake processes so both go through the same
/// line handling. The reader is dropped before returning.
pub(crate) fn read_first_line_from<R: Read>(
    reader: R,
    command: &str,
) -> CoreResult<Option<String>> {
    let mut bytes = Vec::new();
    let read = BufReader::new(reader)
        .read_until(b'\n', &mut bytes)
        .map_err(|e| CoreError::OutputRead(command.to_string(), e))?;

    if read == 0 {
        return Ok(None);
    }

    let end = bytes
        .iter()
        .position(|b| *b == b'\r' || *b == b'\n')
        .unwrap_or(bytes.len());
    bytes.truncate(end);

    String::from_utf8(bytes).map(Some).map_err(|e| {
        CoreError::OutputRead(
            command.to_string(),
            io::Error::new(io::ErrorKind::InvalidData, e),
        )
    })
}
