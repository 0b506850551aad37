//! # scriptest
//!
//! Command-line driver for the scriptest test runner: builds the command
//! registry, scans the script, feeds each invocation to the engine, and turns
//! the run's overall status into the process exit code.

mod commands;
mod driver;

use clap::Parser;
use colored::Colorize;
use scriptest_eval::{Engine, Status};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scriptest")]
#[command(about = "Script-driven test runner", long_about = None)]
#[command(version)]
struct Cli {
    /// Script path; reads standard input when omitted.
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Expect the whole run to finish with this status (name or code).
    #[arg(long, value_name = "STATUS")]
    expect: Option<String>,

    /// List every registered command with its arity and exit.
    #[arg(long)]
    list_commands: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve --expect before anything runs, so a bad value fails fast.
    let expecting = match cli.expect.as_deref().map(str::parse::<Status>) {
        Some(Ok(status)) => Some(status),
        Some(Err(err)) => {
            eprintln!(
                "{} {} {} for --expect",
                "scriptest:".bold(),
                format!("{}:", Status::CommandLineArgError).red(),
                err
            );
            std::process::exit(Status::CommandLineArgError.exit_code());
        }
        None => None,
    };

    let status = run(&cli);
    let status = finish(status, expecting);
    std::process::exit(status.exit_code());
}

fn run(cli: &Cli) -> Status {
    let mut engine = match Engine::new(commands::COMMANDS) {
        Ok(engine) => engine,
        Err(err) => {
            // Structural registry error: abort startup, never run a line.
            eprintln!(
                "{} {} {}",
                "scriptest:".bold(),
                format!("{}:", err.status()).red(),
                err
            );
            return err.status();
        }
    };

    if cli.list_commands {
        for descriptor in engine.table().iter() {
            println!("{} expects {}", descriptor.name, descriptor.arity);
        }
        return Status::ListCommands;
    }

    let source = match driver::load_script(cli.script.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!(
                "{} {} {:#}",
                "scriptest:".bold(),
                format!("{}:", Status::IOError).red(),
                err
            );
            return Status::IOError;
        }
    };

    driver::run_source(&mut engine, &source)
}

/// Applies the driver-level `--expect` comparison: a matching overall status
/// becomes success, anything else becomes an error.
fn finish(status: Status, expecting: Option<Status>) -> Status {
    let Some(expected) = expecting else {
        return status;
    };

    if status == expected {
        Status::Ok
    } else {
        eprintln!(
            "{} {} expected the run to finish with {}, but it finished with {}",
            "scriptest:".bold(),
            format!("{}:", Status::Error).red(),
            expected,
            status
        );
        Status::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_without_expectation_is_identity() {
        assert_eq!(finish(Status::Ok, None), Status::Ok);
        assert_eq!(finish(Status::NoSuchCommand, None), Status::NoSuchCommand);
    }

    #[test]
    fn finish_turns_a_matching_status_into_success() {
        assert_eq!(finish(Status::FatalError, Some(Status::FatalError)), Status::Ok);
        assert_eq!(finish(Status::Ok, Some(Status::Ok)), Status::Ok);
    }

    #[test]
    fn finish_flags_a_mismatch() {
        assert_eq!(finish(Status::Ok, Some(Status::Error)), Status::Error);
        assert_eq!(finish(Status::NoMemory, Some(Status::Error)), Status::Error);
    }

    #[test]
    fn cli_parses_script_and_flags() {
        let cli = Cli::parse_from(["scriptest", "suite.test", "--expect", "3"]);
        assert_eq!(cli.script.as_deref(), Some(std::path::Path::new("suite.test")));
        assert_eq!(cli.expect.as_deref(), Some("3"));
        assert!(!cli.list_commands);
    }

    #[test]
    fn cli_defaults_to_stdin() {
        let cli = Cli::parse_from(["scriptest"]);
        assert!(cli.script.is_none());
        assert!(cli.expect.is_none());
    }
}
