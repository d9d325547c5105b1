//! Configuration builder
//!
//! Merges configuration from files, environment, and CLI arguments.
//! Later sources win: defaults < file < environment < CLI.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

use std::path::PathBuf;

/// Environment variable overriding the downstream program.
pub const TOOL_ENV: &str = "APVIZ_TOOL";

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// With an explicit path the file must exist and parse. Without one the
    /// search locations are optional, but a file that is present yet broken
    /// is still an error rather than being skipped.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            self.config = ConfigFile::load(path)?;
        } else if let Some(found) = Self::search_paths().into_iter().find(|p| p.exists()) {
            self.config = ConfigFile::load(&found)?;
        }
        Ok(self)
    }

    /// Locations probed when no config path is given: the per-user config
    /// directory, then the working directory.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("apviz/config.toml"));
        }
        paths.push(PathBuf::from("apviz.toml"));
        paths
    }

    /// Apply environment overrides
    pub fn with_env(self) -> Self {
        self.with_env_lookup(|name| std::env::var(name).ok())
    }

    /// Apply environment overrides through the given lookup
    pub fn with_env_lookup<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let tool = lookup(TOOL_ENV);
        self.with_tool(tool)
    }

    /// Override the downstream program
    pub fn with_tool(mut self, tool: Option<String>) -> Self {
        if let Some(t) = tool {
            self.config.tool.program = t;
        }
        self
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.config.general.verbose = true;
        }
        self
    }

    /// Override with CLI dry-run flag
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        if dry_run {
            self.config.general.dry_run = true;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
