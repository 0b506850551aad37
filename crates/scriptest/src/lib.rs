//! Umbrella crate: the whole scriptest public API behind one dependency.
//!
//! ```
//! use scriptest::prelude::*;
//!
//! fn nop(_: &mut Engine, _: &[String]) -> anyhow::Result<()> {
//!     Ok(())
//! }
//!
//! let commands = [CommandDescriptor {
//!     name: "nop",
//!     arity: Arity::Exact(0),
//!     handler: nop,
//! }];
//! let mut engine = Engine::new(&commands).unwrap();
//!
//! for invocation in scan("nop\nexpect 11 zzz\n").unwrap() {
//!     assert_eq!(engine.invoke(&invocation.name, &invocation.args), Status::Ok);
//! }
//! ```

pub use scriptest_eval::{
    check, raise, status_of, Arity, BuildError, CommandDescriptor, CommandTable, Engine,
    ExpectationStack, Handler, InvalidStatus, Raise, Status, ALL_STATUSES,
};
pub use scriptest_syntax::{format_error_with_source, scan, Invocation, ScanError, Span};

pub mod prelude {
    pub use crate::{scan, Arity, CommandDescriptor, Engine, Status};
}
