//! Built-in commands, registered ahead of the caller's descriptor list.

use crate::engine::Engine;
use crate::raise;
use crate::registry::{Arity, CommandDescriptor};
use crate::status::Status;
use crate::Raise;

/// The built-in command list merged into every registry.
pub const BUILTINS: &[CommandDescriptor] = &[CommandDescriptor {
    name: "expect",
    arity: Arity::AtLeast(2),
    handler: builtin_expect,
}];

/// `expect <status> <command> [args...]`
///
/// Arms a one-shot expectation for `<status>`, then dispatches `<command>`
/// with the remaining arguments. The nested invocation's evaluated result is
/// `Ok` exactly when the anticipated status occurred; anything else
/// (including `unexpected-success`) is re-raised so it propagates to this
/// builtin's own invocation boundary unchanged.
fn builtin_expect(engine: &mut Engine, args: &[String]) -> anyhow::Result<()> {
    let expected: Status = args[0]
        .parse()
        .map_err(|err| Raise::new(Status::Error, format!("{} for expect", err)))?;

    if !engine.anticipate(expected) {
        raise!(Status::Error, "expectations nested deeper than two levels");
    }

    let evaluated = engine.invoke(&args[1], &args[2..]);

    if evaluated != Status::Ok {
        return Err(anyhow::Error::new(Raise::new(
            evaluated,
            format!("command \"{}\" evaluated to {}", args[1], evaluated),
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(_: &mut Engine, _: &[String]) -> anyhow::Result<()> {
        Ok(())
    }

    fn erroring(_: &mut Engine, _: &[String]) -> anyhow::Result<()> {
        Err(anyhow::Error::new(Raise::new(Status::Error, "raised")))
    }

    fn oom(_: &mut Engine, _: &[String]) -> anyhow::Result<()> {
        Err(anyhow::Error::new(Raise::new(Status::NoMemory, "raised")))
    }

    fn commands() -> Vec<CommandDescriptor> {
        vec![
            CommandDescriptor { name: "works", arity: Arity::AtLeast(0), handler: ok },
            CommandDescriptor { name: "breaks", arity: Arity::AtLeast(0), handler: erroring },
            CommandDescriptor { name: "oom", arity: Arity::AtLeast(0), handler: oom },
        ]
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn expect_matches_raised_status() {
        let mut engine = Engine::new(&commands()).unwrap();
        assert_eq!(engine.invoke("expect", &strings(&["1", "breaks"])), Status::Ok);
        assert_eq!(engine.invoke("expect", &strings(&["error", "breaks"])), Status::Ok);
    }

    #[test]
    fn expect_flags_missing_failure() {
        let mut engine = Engine::new(&commands()).unwrap();
        assert_eq!(
            engine.invoke("expect", &strings(&["1", "works"])),
            Status::UnexpectedSuccess
        );
    }

    #[test]
    fn expect_passes_mismatched_status_through() {
        let mut engine = Engine::new(&commands()).unwrap();
        assert_eq!(
            engine.invoke("expect", &strings(&["1", "oom"])),
            Status::NoMemory
        );
    }

    #[test]
    fn expect_ok_of_a_clean_command() {
        let mut engine = Engine::new(&commands()).unwrap();
        assert_eq!(engine.invoke("expect", &strings(&["ok", "works"])), Status::Ok);
    }

    #[test]
    fn expect_rejects_bad_status_values() {
        let mut engine = Engine::new(&commands()).unwrap();
        assert_eq!(engine.invoke("expect", &strings(&["bogus", "works"])), Status::Error);
        assert_eq!(engine.invoke("expect", &strings(&["42", "works"])), Status::Error);
    }

    #[test]
    fn expect_needs_two_arguments() {
        let mut engine = Engine::new(&commands()).unwrap();
        assert_eq!(engine.invoke("expect", &strings(&["1"])), Status::ArgCountMismatch);
    }

    #[test]
    fn nested_expect_two_levels() {
        let mut engine = Engine::new(&commands()).unwrap();
        // Inner expect evaluates to Ok, and the outer anticipates exactly that.
        assert_eq!(
            engine.invoke("expect", &strings(&["ok", "expect", "1", "breaks"])),
            Status::Ok
        );
        // Outer anticipates unexpected-success; inner misses its failure.
        assert_eq!(
            engine.invoke(
                "expect",
                &strings(&["unexpected-success", "expect", "1", "works"])
            ),
            Status::Ok
        );
    }

    #[test]
    fn third_nesting_level_is_refused() {
        let mut engine = Engine::new(&commands()).unwrap();
        assert!(engine.anticipate(Status::NoMemory));
        assert!(engine.anticipate(Status::FatalError));
        // Both slots armed: expect refuses to arm a third level and raises.
        let status = engine.invoke("expect", &strings(&["1", "breaks"]));
        assert_eq!(status, Status::Error);
    }

    #[test]
    fn expect_of_unknown_command_matches_dispatch_status() {
        let mut engine = Engine::new(&commands()).unwrap();
        // Dispatch errors bypass evaluation, so the armed slot survives until
        // the builtin re-raises and the outer boundary consumes it.
        assert_eq!(
            engine.invoke("expect", &strings(&["no-such-command", "zzz"])),
            Status::Ok
        );
    }
}
