//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use serde::{Deserialize, Serialize};

/// Default downstream program when nothing overrides it.
pub const DEFAULT_TOOL: &str = "visualise_apertures.py";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Downstream tool settings
    pub tool: ToolConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
    /// Print the command line instead of running it
    pub dry_run: bool,
}

/// Downstream tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Program to invoke (name on PATH or a filesystem path)
    pub program: String,
    /// Optional interpreter to run the program under (e.g. "python")
    pub interpreter: Option<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_TOOL.to_string(),
            interpreter: None,
        }
    }
}

impl Config {
    /// Resolve the program to spawn and any arguments that precede the
    /// forwarded ones.
    ///
    /// With an interpreter configured the program itself becomes the first
    /// argument, so the script does not need an exec bit or a shebang.
    pub fn command_line(&self) -> (String, Vec<String>) {
        match &self.tool.interpreter {
            Some(interpreter) => (interpreter.clone(), vec![self.tool.program.clone()]),
            None => (self.tool.program.clone(), Vec::new()),
        }
    }
}
