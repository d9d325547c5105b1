//! Forwarding argument construction
//!
//! Pure translation from the launcher's command line to the argument vector
//! the downstream visualiser expects. No process is spawned here; callers
//! hand the result to a [`ToolRunner`](crate::spawn::ToolRunner).

use crate::error::ForwardError;

/// Flag the downstream tool receives on a help invocation.
pub const HELP_FLAG: &str = "--help";

/// Flag under which the directory is repeated for the downstream tool.
const PHOTFILES_FLAG: &str = "-p";

/// Result of interpreting a raw command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// The user asked for the downstream tool's help; nothing else is forwarded.
    HelpRequested,
    /// A normal run with a resolved forwarding plan.
    Run(ForwardPlan),
}

/// The directory plus passthrough tokens that make up a forwarding run.
///
/// The directory is forwarded twice: once positionally and once as the value
/// of `-p`, matching the downstream tool's contract. Passthrough tokens keep
/// their original relative order and are never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardPlan {
    directory: String,
    passthrough: Vec<String>,
}

impl ForwardPlan {
    /// Create a plan from an already-split directory and passthrough tokens.
    pub fn new(directory: impl Into<String>, passthrough: Vec<String>) -> Self {
        Self {
            directory: directory.into(),
            passthrough,
        }
    }

    /// The dataset directory, exactly as given on the command line.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Tokens forwarded verbatim after the directory arguments.
    pub fn passthrough(&self) -> &[String] {
        &self.passthrough
    }

    /// Build the downstream argument vector:
    /// `[directory, "-p", directory] ++ passthrough`.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(3 + self.passthrough.len());
        argv.push(self.directory.clone());
        argv.push(PHOTFILES_FLAG.to_string());
        argv.push(self.directory.clone());
        argv.extend(self.passthrough.iter().cloned());
        argv
    }
}

/// Interpret a raw token sequence (the process argument list minus `argv[0]`).
///
/// A first token of exactly `-h` or `--help` wins over everything else, even
/// when further tokens are present. An empty sequence is a usage error. Any
/// other first token is taken as the directory, with the remaining tokens
/// passed through untouched.
pub fn build<S: AsRef<str>>(tokens: &[S]) -> Result<Invocation, ForwardError> {
    match tokens.first().map(AsRef::as_ref) {
        Some("-h") | Some("--help") => Ok(Invocation::HelpRequested),
        Some(directory) => Ok(Invocation::Run(ForwardPlan::new(
            directory,
            tokens[1..].iter().map(|t| t.as_ref().to_string()).collect(),
        ))),
        None => Err(ForwardError::MissingArgument),
    }
}
