//! Unified error types for apviz
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from forwarding argument construction
    #[error(transparent)]
    Forward(#[from] ForwardError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error spawning or waiting on the downstream tool
    #[error(transparent)]
    Spawn(#[from] SpawnError),

    /// Launcher option parse failure, rendered by clap
    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from forwarding argument construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForwardError {
    /// No directory token was supplied
    #[error("Missing required <DIRECTORY> argument")]
    MissingArgument,
}

/// Errors from spawning the downstream tool
#[derive(Error, Debug)]
pub enum SpawnError {
    /// The downstream program was not found on PATH
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Any other failure starting or waiting on the process
    #[error("Failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
