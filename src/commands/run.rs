//! Forwarding run
//!
//! Resolves the downstream command line from the plan and configuration,
//! then spawns the tool and hands its exit code back to the caller.

use crate::config::Config;
use crate::error::Result;
use crate::forward::ForwardPlan;
use crate::spawn::ToolRunner;

/// Execute a forwarding run, returning the exit code to propagate.
///
/// In dry-run mode the resolved command line is printed and nothing is
/// spawned.
pub fn run_forward(plan: &ForwardPlan, config: &Config, runner: &dyn ToolRunner) -> Result<i32> {
    let (program, mut args) = config.command_line();
    args.extend(plan.argv());

    log::debug!("Resolved command: {} {:?}", program, args);

    if config.general.dry_run {
        println!("{} {}", program, args.join(" "));
        return Ok(0);
    }

    let status = runner.run(&program, &args)?;
    if !status.success() {
        log::warn!(
            "{} exited with status {}",
            program,
            status.exit_code()
        );
    }

    Ok(status.exit_code())
}
