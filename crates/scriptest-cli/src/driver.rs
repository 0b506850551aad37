//! The script driver: feeds scanned invocations to the engine and decides
//! which statuses halt the run.

use anyhow::{Context, Result};
use colored::Colorize;
use scriptest_eval::{Engine, Status};
use scriptest_syntax::{format_error_with_source, Invocation, ScanError};
use std::io::Read;
use std::path::Path;

/// Statuses that stop the run immediately; everything else is recorded and
/// the driver proceeds to the next script line. This policy lives here, not
/// in the engine.
fn halts_run(status: Status) -> bool {
    matches!(
        status,
        Status::NoMemory
            | Status::FatalError
            | Status::MemoryError
            | Status::IOError
            | Status::SyntaxError
    )
}

/// Reads the script source from a file, or from standard input when no path
/// was given.
pub fn load_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("could not read script {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("could not read script from standard input")?;
            Ok(source)
        }
    }
}

/// Runs a script source through the engine and returns the run's overall
/// status: `Ok` if every line evaluated clean, otherwise the first non-`Ok`
/// outcome (or the halting status that cut the run short).
pub fn run_source(engine: &mut Engine, source: &str) -> Status {
    let invocations = match scriptest_syntax::scan(source) {
        Ok(invocations) => invocations,
        Err(err) => {
            report_scan_error(&err, source);
            return Status::SyntaxError;
        }
    };

    let mut overall = Status::Ok;

    for invocation in &invocations {
        let status = engine.invoke(&invocation.name, &invocation.args);
        if status == Status::Ok {
            continue;
        }

        report_line_failure(invocation, status);

        if halts_run(status) {
            return status;
        }
        if overall == Status::Ok {
            overall = status;
        }
    }

    overall
}

fn report_scan_error(err: &ScanError, source: &str) {
    eprint!("{}", format_error_with_source(err, source));
}

fn report_line_failure(invocation: &Invocation, status: Status) {
    eprintln!(
        "{} line {}: command \"{}\" finished with {}",
        "scriptest:".bold(),
        invocation.span.line,
        invocation.name,
        status.to_string().red()
    );
}
