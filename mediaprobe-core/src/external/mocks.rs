// mediaprobe-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for this crate's unit tests and, for downstream tests, when the
// "test-mocks" feature is enabled.

use super::{ProbeCommand, ProbeProcess, ProcessSpawner, read_first_line_from};
use crate::error::{CoreError, CoreResult, command_start_error, command_wait_error};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io::{self, Read};
use std::rc::Rc;
use std::time::Duration;

/// What a [`MockProcess`] hands back from its standard output.
#[derive(Debug, Clone)]
pub enum MockStdout {
    /// The bytes the process wrote.
    Bytes(Vec<u8>),
    /// Every read fails with this error kind.
    Error(io::ErrorKind),
}

/// Reader that fails every read, standing in for a broken pipe.
struct FailingStdout(io::ErrorKind);

impl Read for FailingStdout {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(self.0, "mock stdout failure"))
    }
}

/// Mock implementation of [`ProbeProcess`].
#[derive(Debug, Clone)]
pub struct MockProcess {
    /// Result of `wait`: the exit code, or the kind of wait failure.
    pub wait_result: Result<Option<i32>, io::ErrorKind>,
    pub stdout: MockStdout,
    /// Number of `read_first_line` calls observed.
    pub reads: Rc<Cell<usize>>,
}

impl MockProcess {
    /// A process that exits with `code` after writing `stdout`.
    pub fn exited(code: i32, stdout: &str) -> Self {
        Self {
            wait_result: Ok(Some(code)),
            stdout: MockStdout::Bytes(stdout.as_bytes().to_vec()),
            reads: Rc::default(),
        }
    }

    /// A process that exits successfully but whose stdout fails to read.
    pub fn failing_stdout(kind: io::ErrorKind) -> Self {
        Self {
            wait_result: Ok(Some(0)),
            stdout: MockStdout::Error(kind),
            reads: Rc::default(),
        }
    }

    /// A process that was terminated by a signal.
    pub fn signalled() -> Self {
        Self {
            wait_result: Ok(None),
            stdout: MockStdout::Bytes(Vec::new()),
            reads: Rc::default(),
        }
    }

    /// A process whose `wait` fails, e.g. because it was interrupted.
    pub fn wait_error(kind: io::ErrorKind) -> Self {
        Self {
            wait_result: Err(kind),
            stdout: MockStdout::Bytes(Vec::new()),
            reads: Rc::default(),
        }
    }
}

impl ProbeProcess for MockProcess {
    fn wait(&mut self, _timeout: Option<Duration>) -> CoreResult<Option<i32>> {
        self.wait_result
            .map_err(|kind| command_wait_error("mock", io::Error::new(kind, "mock wait failure")))
    }

    fn read_first_line(&mut self) -> CoreResult<Option<String>> {
        self.reads.set(self.reads.get() + 1);
        match &self.stdout {
            MockStdout::Bytes(bytes) => read_first_line_from(bytes.as_slice(), "mock"),
            MockStdout::Error(kind) => read_first_line_from(FailingStdout(*kind), "mock"),
        }
    }
}

/// Mock implementation of [`ProcessSpawner`].
///
/// Hands out queued results in order and records the command line of every
/// spawn request.
#[derive(Clone, Default)]
pub struct MockSpawner {
    results: Rc<RefCell<VecDeque<CoreResult<MockProcess>>>>,
    received_calls: Rc<RefCell<Vec<String>>>,
}

impl MockSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a process to return from the next `spawn`.
    pub fn add_process(&self, process: MockProcess) {
        self.results.borrow_mut().push_back(Ok(process));
    }

    /// Queues a spawn failure of the given kind.
    pub fn add_spawn_error(&self, kind: io::ErrorKind) {
        self.results.borrow_mut().push_back(Err(command_start_error(
            "mock",
            io::Error::new(kind, "mock spawn failure"),
        )));
    }

    /// Command lines received so far, oldest first.
    pub fn get_received_calls(&self) -> Vec<String> {
        self.received_calls.borrow().clone()
    }
}

impl ProcessSpawner for MockSpawner {
    type Process = MockProcess;

    fn spawn(&self, command: &ProbeCommand) -> CoreResult<Self::Process> {
        let rendered = command.to_string();
        self.received_calls.borrow_mut().push(rendered.clone());

        match self.results.borrow_mut().pop_front() {
            Some(result) => result,
            None => {
                log::error!("MockSpawner: no result queued for '{}'", rendered);
                Err(CoreError::CommandStart(
                    rendered,
                    io::Error::new(io::ErrorKind::NotFound, "no mock result queued"),
                ))
            }
        }
    }
}
