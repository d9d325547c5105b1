//! apviz - launcher for the aperture visualisation tool
//!
//! A thin command-line wrapper that forwards a dataset directory (both
//! positionally and as -p) plus any extra arguments to the downstream
//! aperture visualiser, propagating its exit status.

use apviz::cli::{self, Parsed};
use apviz::commands::{run_forward, run_help};
use apviz::config::ConfigBuilder;
use apviz::error::{AppError, ForwardError};
use apviz::forward::ForwardPlan;
use apviz::spawn::ProcessRunner;

use clap::CommandFactory;

fn main() {
    let tokens: Vec<String> = std::env::args().skip(1).collect();

    match run(tokens) {
        Ok(code) => std::process::exit(code),
        Err(AppError::Cli(e)) => e.exit(),
        Err(e) => {
            print_error(&e);
            std::process::exit(exit_code(&e));
        }
    }
}

fn run(tokens: Vec<String>) -> Result<i32, AppError> {
    let parsed = cli::parse_tokens(tokens)?;
    let runner = ProcessRunner::new();

    match parsed {
        Parsed::Help => {
            init_logging(false);
            let config = ConfigBuilder::new().with_file(None)?.with_env().build();
            run_help(&config, &runner)
        }
        Parsed::Run(cli) => {
            let config = ConfigBuilder::new()
                .with_file(cli.config.as_deref())?
                .with_tool(cli.tool.clone())
                .with_verbose(cli.verbose)
                .with_dry_run(cli.dry_run)
                .build();

            // The filter is fixed at init, so the logger comes up only after
            // file and CLI verbosity have been merged.
            init_logging(config.general.verbose);

            let plan = ForwardPlan::new(cli.directory, cli.extra);
            run_forward(&plan, &config, &runner)
        }
    }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(verbose)),
    )
    .format_timestamp(None)
    .init();
}

fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn exit_code(err: &AppError) -> i32 {
    match err {
        // Usage errors mirror clap's exit code
        AppError::Forward(ForwardError::MissingArgument) => 2,
        _ => 1,
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Forward(ForwardError::MissingArgument) => {
            eprintln!();
            eprintln!("{}", cli::Cli::command().render_usage());
        }
        AppError::Spawn(apviz::error::SpawnError::ToolNotFound(program)) => {
            eprintln!();
            eprintln!("Hint: '{}' is not on PATH.", program);
            eprintln!("      Point apviz at the visualiser with --tool, APVIZ_TOOL,");
            eprintln!("      or the [tool] section of the config file.");
        }
        _ => {}
    }
}
