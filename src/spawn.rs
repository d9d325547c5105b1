//! Process spawning abstraction
//!
//! The runner trait isolates process invocation so command handlers can be
//! tested without launching anything. Arguments are always handed to the
//! operating system as a discrete array; no string is ever re-split.

use crate::error::SpawnError;

use std::io;
use std::process::{Command, ExitStatus};

/// Exit status of a downstream tool run.
///
/// `code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    code: Option<i32>,
}

impl ToolStatus {
    /// Status for a process that exited with the given code.
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Status for a process killed by a signal.
    pub fn signaled() -> Self {
        Self { code: None }
    }

    /// True when the downstream tool exited cleanly with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code to propagate from the launcher; signal termination maps to 1.
    pub fn exit_code(&self) -> i32 {
        self.code.unwrap_or(1)
    }
}

impl From<ExitStatus> for ToolStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Trait for running the downstream tool
///
/// This trait abstracts process invocation, allowing for mock implementations
/// in tests while using real processes in production.
pub trait ToolRunner {
    /// Run `program` with `args` and wait for it to finish.
    fn run(&self, program: &str, args: &[String]) -> Result<ToolStatus, SpawnError>;
}

/// Runner backed by `std::process::Command`
///
/// Stdin/stdout/stderr are inherited so the downstream tool owns the
/// terminal for the duration of the run.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ToolStatus, SpawnError> {
        log::debug!("Spawning {} with args {:?}", program, args);

        let status = Command::new(program).args(args).status().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SpawnError::ToolNotFound(program.to_string())
            } else {
                SpawnError::Io {
                    program: program.to_string(),
                    source: e,
                }
            }
        })?;

        Ok(ToolStatus::from(status))
    }
}
