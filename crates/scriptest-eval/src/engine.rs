//! The execution engine: arity validation, handler dispatch, and the
//! invocation boundary where raised statuses are caught and evaluated.

use colored::Colorize;

use crate::builtins;
use crate::expectation::ExpectationStack;
use crate::raise;
use crate::registry::{BuildError, CommandDescriptor, CommandTable};
use crate::status::Status;

/// Prints a failure report in the `scriptest: <status>: <message>` shape.
fn report(status: Status, message: &str) {
    eprintln!(
        "{} {} {}",
        "scriptest:".bold(),
        format!("{}:", status).red(),
        message
    );
}

/// The command-execution engine.
///
/// Owns the read-only [`CommandTable`] and the [`ExpectationStack`]; both are
/// built by and belong to the script driver, never to process-wide state.
/// Handlers receive `&mut Engine`, so a meta-command may call
/// [`invoke`](Self::invoke) recursively; every nested call is its own unwind
/// scope and statuses only travel up through return values.
#[derive(Debug)]
pub struct Engine {
    table: CommandTable,
    expectations: ExpectationStack,
}

impl Engine {
    /// Builds the registry from the built-in commands plus the caller's
    /// descriptor list. A duplicate or empty name is a fatal [`BuildError`];
    /// the driver aborts startup instead of running anything.
    pub fn new(commands: &[CommandDescriptor]) -> Result<Self, BuildError> {
        let table = CommandTable::build(&[builtins::BUILTINS, commands])?;
        Ok(Self {
            table,
            expectations: ExpectationStack::new(),
        })
    }

    /// The command registry, for listing and lookups.
    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Arms a one-shot expectation for the next evaluated outcome.
    ///
    /// Used by the `expect` builtin; returns `false` when expectations are
    /// already nested two deep.
    pub fn anticipate(&mut self, status: Status) -> bool {
        self.expectations.anticipate(status)
    }

    /// Runs one command by name.
    ///
    /// Dispatch failures (unknown name, arity mismatch) return their status
    /// directly; the handler never runs and the expectation stack is not
    /// touched. A handler outcome, normal or raised, is fed through
    /// [`ExpectationStack::evaluate`] before being returned.
    pub fn invoke(&mut self, name: &str, args: &[String]) -> Status {
        if name.is_empty() {
            report(Status::NoCommandName, "cannot invoke a command without a name");
            return Status::NoCommandName;
        }

        let descriptor = match self.table.lookup(name) {
            Some(descriptor) => *descriptor,
            None => {
                report(
                    Status::NoSuchCommand,
                    &format!("command \"{}\" not found", name),
                );
                return Status::NoSuchCommand;
            }
        };

        if !descriptor.arity.admits(args.len()) {
            report(
                Status::ArgCountMismatch,
                &format!(
                    "command \"{}\" expected {}, but got {}",
                    name,
                    descriptor.arity,
                    args.len()
                ),
            );
            return Status::ArgCountMismatch;
        }

        let status = match (descriptor.handler)(self, args) {
            Ok(()) => Status::Ok,
            Err(err) => {
                let status = raise::status_of(&err);
                report(status, &format!("{:#}", err));
                status
            }
        };

        self.expectations.evaluate(status)
    }
}
