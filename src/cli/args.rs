//! CLI argument definitions using clap derive
//!
//! The launcher's own help flag is disabled: a leading `-h`/`--help` belongs
//! to the downstream tool and is short-circuited before clap ever runs.
//!
//! Launcher options are valid only before the directory. Tokens after the
//! directory are passthrough and must survive verbatim even when they spell a
//! launcher option name, so clap never sees them: the raw token list is split
//! at the directory, clap parses the prefix, and the tail is attached as
//! `extra` by hand.

use crate::error::{AppError, ForwardError};
use crate::forward::{self, Invocation};

use clap::error::ErrorKind;
use clap::Parser;

/// Launcher options that consume a following value token.
const VALUE_OPTIONS: [&str; 3] = ["-c", "--config", "--tool"];

/// Launcher for the aperture visualisation tool
///
/// Forwards the dataset directory (positionally and as -p) plus any extra
/// arguments to the downstream visualiser.
#[derive(Parser, Debug)]
#[command(name = "apviz")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the downstream command line without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Path to configuration file
    #[arg(short, long, env = "APVIZ_CONFIG")]
    pub config: Option<String>,

    /// Downstream program to invoke
    #[arg(long, env = "APVIZ_TOOL")]
    pub tool: Option<String>,

    /// Directory of reduced images, forwarded positionally and as -p
    #[arg(value_name = "DIRECTORY")]
    pub directory: String,

    /// Extra arguments forwarded verbatim to the downstream tool
    ///
    /// Declared so usage renders the full surface; values are attached by
    /// [`parse_tokens`], never by clap.
    #[arg(value_name = "EXTRA")]
    pub extra: Vec<String>,
}

/// A fully parsed launcher command line.
#[derive(Debug)]
pub enum Parsed {
    /// Forward only a help flag downstream.
    Help,
    /// A normal run with launcher options attached.
    Run(Cli),
}

/// Position of the directory token: the first token that is not a launcher
/// option or an option's value. A lone `--` ends the option prefix and makes
/// the following token the directory even when it starts with a hyphen.
fn directory_position(tokens: &[String]) -> Option<usize> {
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        if token == "--" {
            return if i + 1 < tokens.len() { Some(i + 1) } else { None };
        }
        if token.len() > 1 && token.starts_with('-') {
            // `--tool=x` and attached short values stay one token.
            i += if VALUE_OPTIONS.contains(&token) { 2 } else { 1 };
        } else {
            return Some(i);
        }
    }
    None
}

/// Parse the raw token list (process args minus `argv[0]`).
///
/// The raw-token rules apply first via [`forward::build`]: a leading `-h` or
/// `--help` short-circuits to a help invocation before clap sees anything, so
/// the downstream tool keeps ownership of the help text, and an empty command
/// line is [`ForwardError::MissingArgument`]. Launcher options given without
/// a directory surface as the same error; other parse failures keep clap's
/// rendering.
pub fn parse_tokens(tokens: Vec<String>) -> Result<Parsed, AppError> {
    if let Invocation::HelpRequested = forward::build(&tokens)? {
        return Ok(Parsed::Help);
    }

    let mut argv = vec!["apviz".to_string()];
    let extra = match directory_position(&tokens) {
        Some(dir_idx) => {
            argv.extend(tokens[..dir_idx].iter().cloned());
            if argv.last().map(String::as_str) != Some("--") {
                argv.push("--".to_string());
            }
            argv.push(tokens[dir_idx].clone());
            tokens[dir_idx + 1..].to_vec()
        }
        // No directory in sight; let clap report what is wrong.
        None => {
            argv.extend(tokens);
            Vec::new()
        }
    };

    match Cli::try_parse_from(argv) {
        Ok(mut cli) => {
            cli.extra = extra;
            Ok(Parsed::Run(cli))
        }
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            Err(ForwardError::MissingArgument.into())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: &[&str]) -> Result<Parsed, AppError> {
        parse_tokens(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_parse_directory_only() {
        let parsed = parse(&["data/night1"]).unwrap();
        match parsed {
            Parsed::Run(cli) => {
                assert_eq!(cli.directory, "data/night1");
                assert!(cli.extra.is_empty());
            }
            other => panic!("expected a run, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_options_before_directory() {
        let parsed = parse(&["-v", "--dry-run", "--tool", "viewer", "data"]).unwrap();
        match parsed {
            Parsed::Run(cli) => {
                assert!(cli.verbose);
                assert!(cli.dry_run);
                assert_eq!(cli.tool.as_deref(), Some("viewer"));
                assert_eq!(cli.directory, "data");
                assert!(cli.extra.is_empty());
            }
            other => panic!("expected a run, got {:?}", other),
        }
    }

    #[test]
    fn test_flags_after_directory_are_passthrough() {
        let parsed = parse(&["data", "--dry-run", "-v", "--threshold", "5"]).unwrap();
        match parsed {
            Parsed::Run(cli) => {
                assert!(!cli.dry_run);
                assert!(!cli.verbose);
                assert_eq!(cli.extra, vec!["--dry-run", "-v", "--threshold", "5"]);
            }
            other => panic!("expected a run, got {:?}", other),
        }
    }

    #[test]
    fn test_launcher_option_names_after_directory_are_not_stolen() {
        // Tokens spelling launcher options must reach the downstream tool
        // untouched, including ones that take values.
        let parsed = parse(&["data", "--dry-run", "-v", "--tool", "x"]).unwrap();
        match parsed {
            Parsed::Run(cli) => {
                assert!(!cli.dry_run);
                assert!(!cli.verbose);
                assert_eq!(cli.directory, "data");
                assert_eq!(cli.extra, vec!["--dry-run", "-v", "--tool", "x"]);
            }
            other => panic!("expected a run, got {:?}", other),
        }
    }

    #[test]
    fn test_double_dash_allows_hyphen_directory() {
        let parsed = parse(&["--", "-odd-dir", "--hide-ui"]).unwrap();
        match parsed {
            Parsed::Run(cli) => {
                assert_eq!(cli.directory, "-odd-dir");
                assert_eq!(cli.extra, vec!["--hide-ui"]);
            }
            other => panic!("expected a run, got {:?}", other),
        }
    }

    #[test]
    fn test_value_option_does_not_swallow_directory() {
        let parsed = parse(&["--config", "conf.toml", "data"]).unwrap();
        match parsed {
            Parsed::Run(cli) => {
                assert_eq!(cli.config.as_deref(), Some("conf.toml"));
                assert_eq!(cli.directory, "data");
            }
            other => panic!("expected a run, got {:?}", other),
        }
    }

    #[test]
    fn test_equals_form_value_option() {
        let parsed = parse(&["--tool=viewer", "data", "-z", "4"]).unwrap();
        match parsed {
            Parsed::Run(cli) => {
                assert_eq!(cli.tool.as_deref(), Some("viewer"));
                assert_eq!(cli.directory, "data");
                assert_eq!(cli.extra, vec!["-z", "4"]);
            }
            other => panic!("expected a run, got {:?}", other),
        }
    }

    #[test]
    fn test_leading_help_short_circuits() {
        assert!(matches!(parse(&["-h"]).unwrap(), Parsed::Help));
        assert!(matches!(parse(&["--help"]).unwrap(), Parsed::Help));
        assert!(matches!(parse(&["-h", "ignored"]).unwrap(), Parsed::Help));
    }

    #[test]
    fn test_no_arguments_is_missing_argument() {
        let err = parse(&[]).unwrap_err();
        assert!(matches!(
            err,
            AppError::Forward(ForwardError::MissingArgument)
        ));
    }

    #[test]
    fn test_options_without_directory_is_missing_argument() {
        let err = parse(&["--dry-run"]).unwrap_err();
        assert!(matches!(
            err,
            AppError::Forward(ForwardError::MissingArgument)
        ));
    }

    #[test]
    fn test_unknown_leading_option_is_cli_error() {
        let err = parse(&["--bogus", "data"]).unwrap_err();
        assert!(matches!(err, AppError::Cli(_)));
    }

    #[test]
    fn test_parsed_run_matches_forwarding_plan() {
        let parsed = parse(&["data/night1", "--threshold", "5"]).unwrap();
        match parsed {
            Parsed::Run(cli) => {
                let plan = crate::forward::ForwardPlan::new(cli.directory, cli.extra);
                assert_eq!(
                    plan.argv(),
                    vec!["data/night1", "-p", "data/night1", "--threshold", "5"]
                );
            }
            other => panic!("expected a run, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_position_scanning() {
        let tokens = |ts: &[&str]| ts.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        assert_eq!(directory_position(&tokens(&["data"])), Some(0));
        assert_eq!(directory_position(&tokens(&["-v", "data"])), Some(1));
        assert_eq!(directory_position(&tokens(&["--tool", "x", "data"])), Some(2));
        assert_eq!(directory_position(&tokens(&["--", "-data"])), Some(1));
        assert_eq!(directory_position(&tokens(&["-v", "--dry-run"])), None);
        assert_eq!(directory_position(&tokens(&["--"])), None);
    }
}
