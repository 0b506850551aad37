//! # scriptest-syntax
//!
//! Scanner for scriptest test scripts.
//!
//! A script is a flat sequence of command invocations, one per line:
//!
//! ```text
//! # exercise the string commands
//! streq foo foo
//! expect 1 streq foo bar
//! echo "quoted argument"
//! ```
//!
//! There are no variables, expressions or control flow; the scanner's whole
//! job is to turn source text into `(command-name, argument-list)` units with
//! source spans for error reporting.

pub mod error;
pub mod scanner;

pub use error::{format_error_with_source, ScanError, Span};
pub use scanner::{scan, Invocation};

/// Scans a script, wrapping scan failures in [`anyhow::Error`].
///
/// The typed [`ScanError`] stays downcastable for callers that want the span:
///
/// ```
/// let err = scriptest_syntax::parse("streq \"oops").unwrap_err();
/// assert!(err.downcast_ref::<scriptest_syntax::ScanError>().is_some());
/// ```
pub fn parse(source: &str) -> anyhow::Result<Vec<Invocation>> {
    scanner::scan(source).map_err(anyhow::Error::new)
}
