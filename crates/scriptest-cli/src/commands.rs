//! The compiled-in command set.
//!
//! Small leaf commands for exercising scripts and the engine itself; the
//! heavier data-structure suites register their own descriptor lists through
//! the same interface.

use anyhow::Result;
use scriptest_eval::{check, raise, Arity, CommandDescriptor, Engine, Raise, Status};

pub const COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { name: "nop", arity: Arity::Exact(0), handler: cmd_nop },
    CommandDescriptor { name: "echo", arity: Arity::AtLeast(0), handler: cmd_echo },
    CommandDescriptor { name: "streq", arity: Arity::Exact(2), handler: cmd_streq },
    CommandDescriptor { name: "strlen", arity: Arity::Exact(2), handler: cmd_strlen },
    CommandDescriptor { name: "fail", arity: Arity::Exact(1), handler: cmd_fail },
];

fn cmd_nop(_: &mut Engine, _: &[String]) -> Result<()> {
    Ok(())
}

fn cmd_echo(_: &mut Engine, args: &[String]) -> Result<()> {
    println!("{}", args.join(" "));
    Ok(())
}

fn cmd_streq(_: &mut Engine, args: &[String]) -> Result<()> {
    check!(
        Status::Error,
        args[0] == args[1],
        "strings \"{}\" and \"{}\" differ",
        args[0],
        args[1]
    );
    Ok(())
}

fn cmd_strlen(_: &mut Engine, args: &[String]) -> Result<()> {
    let expected: usize = args[1]
        .parse()
        .map_err(|_| Raise::new(Status::Error, format!("invalid length \"{}\"", args[1])))?;
    check!(
        Status::Error,
        args[0].chars().count() == expected,
        "\"{}\" does not have length {}",
        args[0],
        expected
    );
    Ok(())
}

/// `fail <status>` raises the given status verbatim; `fail ok` is a no-op.
fn cmd_fail(_: &mut Engine, args: &[String]) -> Result<()> {
    let status = args[0]
        .parse::<Status>()
        .map_err(|err| Raise::new(Status::Error, err.to_string()))?;
    if status == Status::Ok {
        return Ok(());
    }
    raise!(status, "failing on request");
}
