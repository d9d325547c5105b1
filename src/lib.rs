//! apviz - launcher for the aperture visualisation tool
//!
//! This library builds the argument vector the downstream visualiser
//! expects from the launcher's command line, and spawns it behind an
//! injectable runner.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`error`]: Error types
//! - [`forward`]: Forwarding argument construction
//! - [`spawn`]: Process spawning abstraction

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod forward;
pub mod spawn;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, Result};
pub use forward::{build, ForwardPlan, Invocation};
