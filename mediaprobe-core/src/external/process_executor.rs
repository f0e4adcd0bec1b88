// ============================================================================
// mediaprobe-core/src/external/process_executor.rs
// ============================================================================
//
// PROCESS EXECUTOR: std::process Backed Process Management
//
// This module provides the production implementation of the process traits.
// Each spawned child has stdout piped and stdin/stderr detached, and is reaped
// before its handle goes away, whichever path the caller takes.
//
// KEY COMPONENTS:
// - SystemSpawner: Starts processes via std::process::Command
// - SystemProcess: Owns the std::process::Child for one invocation

use super::{ProbeCommand, ProbeProcess, ProcessSpawner, read_first_line_from};
use crate::error::{CoreError, CoreResult, command_start_error, command_wait_error};
use std::process::{Child, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Interval between `try_wait` polls while a timeout is in force.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A running child process started by [`SystemSpawner`].
pub struct SystemProcess {
    child: Child,
    command: String,
}

impl SystemProcess {
    fn wait_with_timeout(&mut self, timeout: Duration) -> CoreResult<Option<i32>> {
        let start = Instant::now();
        loop {
            match self.child.try_wait() {
                Ok(Some(status)) => return Ok(status.code()),
                Ok(None) if start.elapsed() >= timeout => {
                    log::warn!(
                        "Killing '{}' after waiting {:?}",
                        self.command,
                        timeout
                    );
                    self.kill_and_reap();
                    return Err(CoreError::CommandTimeout(self.command.clone(), timeout));
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => return Err(command_wait_error(self.command.clone(), e)),
            }
        }
    }

    fn kill_and_reap(&mut self) {
        if let Err(e) = self.child.kill() {
            log::debug!("Failed to kill '{}': {}", self.command, e);
        }
        if let Err(e) = self.child.wait() {
            log::debug!("Failed to reap '{}': {}", self.command, e);
        }
    }
}

impl ProbeProcess for SystemProcess {
    fn wait(&mut self, timeout: Option<Duration>) -> CoreResult<Option<i32>> {
        match timeout {
            Some(timeout) => self.wait_with_timeout(timeout),
            None => self
                .child
                .wait()
                .map(|status| status.code())
                .map_err(|e| command_wait_error(self.command.clone(), e)),
        }
    }

    fn read_first_line(&mut self) -> CoreResult<Option<String>> {
        match self.child.stdout.take() {
            Some(stdout) => read_first_line_from(stdout, &self.command),
            None => Ok(None),
        }
    }
}

impl Drop for SystemProcess {
    fn drop(&mut self) {
        // A reaped child reports its status; anything else may still be running.
        match self.child.try_wait() {
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => self.kill_and_reap(),
        }
    }
}

/// Spawns processes with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    type Process = SystemProcess;

    fn spawn(&self, command: &ProbeCommand) -> CoreResult<Self::Process> {
        let rendered = command.to_string();
        command
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map(|child| SystemProcess {
                child,
                command: rendered.clone(),
            })
            .map_err(|e| command_start_error(rendered, e))
    }
}
