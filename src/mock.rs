//! Mock implementations for testing
//!
//! Provides a recording tool runner for unit testing without spawning
//! real processes.

use crate::error::SpawnError;
use crate::spawn::{ToolRunner, ToolStatus};

use std::sync::Mutex;

/// A single recorded runner invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
}

/// Runner that records every call and returns a canned status.
pub struct RecordingRunner {
    calls: Mutex<Vec<RecordedCall>>,
    outcome: Outcome,
}

enum Outcome {
    Status(ToolStatus),
    NotFound,
}

impl RecordingRunner {
    /// Runner whose downstream tool always exits 0.
    pub fn succeeding() -> Self {
        Self::exiting(0)
    }

    /// Runner whose downstream tool exits with the given code.
    pub fn exiting(code: i32) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcome: Outcome::Status(ToolStatus::exited(code)),
        }
    }

    /// Runner whose downstream tool cannot be found.
    pub fn not_found() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcome: Outcome::NotFound,
        }
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ToolRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ToolStatus, SpawnError> {
        self.calls.lock().unwrap().push(RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
        });

        match &self.outcome {
            Outcome::Status(status) => Ok(*status),
            Outcome::NotFound => Err(SpawnError::ToolNotFound(program.to_string())),
        }
    }
}
