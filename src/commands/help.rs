//! Help forwarding
//!
//! A leading `-h`/`--help` hands the terminal straight to the downstream
//! tool's help output; none of the launcher's own surface applies.

use crate::config::Config;
use crate::error::Result;
use crate::forward::HELP_FLAG;
use crate::spawn::ToolRunner;

/// Invoke the downstream tool with only a help flag.
pub fn run_help(config: &Config, runner: &dyn ToolRunner) -> Result<i32> {
    let (program, mut args) = config.command_line();
    args.push(HELP_FLAG.to_string());

    let status = runner.run(&program, &args)?;
    Ok(status.exit_code())
}
