//! # scriptest-eval
//!
//! The command-execution engine behind the scriptest runner.
//!
//! Four pieces, leaf first:
//!
//! - [`Status`] - the stable status-code vocabulary shared by scripts, the
//!   engine, and the process exit code.
//! - [`CommandTable`] - a fixed-size, open-addressed registry built once at
//!   startup from static [`CommandDescriptor`] lists.
//! - [`ExpectationStack`] - the two-slot record of anticipated outcomes that
//!   gives the `expect` builtin its nested semantics.
//! - [`Engine`] - validates arity, dispatches handlers, catches raised
//!   statuses at the invocation boundary, and evaluates every outcome
//!   against the expectation stack.
//!
//! Handlers abort with the [`raise!`] and [`check!`] macros; the carried
//! [`Raise`] travels up the native call stack inside [`anyhow::Error`] and is
//! caught exactly at the nearest enclosing [`Engine::invoke`].

pub mod builtins;
mod engine;
mod expectation;
pub mod raise;
pub mod registry;
mod status;

pub use engine::Engine;
pub use expectation::ExpectationStack;
pub use raise::{status_of, Raise};
pub use registry::{Arity, BuildError, CommandDescriptor, CommandTable, Handler};
pub use status::{InvalidStatus, Status, ALL_STATUSES};
