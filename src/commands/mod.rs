//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod help;
pub mod run;

pub use help::run_help;
pub use run::run_forward;
