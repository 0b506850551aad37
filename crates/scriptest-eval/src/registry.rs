//! The command registry: a fixed-size, open-addressed dispatch table built
//! once at startup and read-only thereafter.

use crate::status::Status;
use std::fmt;

/// How many arguments a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many.
    Exact(usize),
    /// This many or more.
    AtLeast(usize),
}

impl Arity {
    /// Whether an argument count satisfies this arity.
    pub fn admits(self, argc: usize) -> bool {
        match self {
            Arity::Exact(n) => argc == n,
            Arity::AtLeast(n) => argc >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "exactly {} argument(s)", n),
            Arity::AtLeast(n) => write!(f, "at least {} argument(s)", n),
        }
    }
}

/// A command handler. Receives the engine (so meta-commands can dispatch
/// nested invocations) and the raw argument strings, arity already checked.
pub type Handler = fn(&mut crate::Engine, &[String]) -> anyhow::Result<()>;

/// The static record naming a command, its arity, and its handler.
#[derive(Debug, Clone, Copy)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub arity: Arity,
    pub handler: Handler,
}

/// A structural error while building the registry. Fatal: the driver aborts
/// startup instead of running any script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Two descriptors share a name.
    NameConflict { name: &'static str },
    /// A descriptor with an empty name.
    UnnamedCommand,
}

impl BuildError {
    pub fn status(&self) -> Status {
        match self {
            BuildError::NameConflict { .. } => Status::NameConflict,
            BuildError::UnnamedCommand => Status::NoCommandName,
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::NameConflict { name } => {
                write!(f, "command \"{}\" registered twice", name)
            }
            BuildError::UnnamedCommand => write!(f, "command with an empty name"),
        }
    }
}

impl std::error::Error for BuildError {}

/// djb2: multiply-add accumulation, seed 5381, multiplier 33.
fn djb2(name: &str) -> usize {
    let mut hash = 5381usize;
    for byte in name.bytes() {
        hash = hash.wrapping_mul(33).wrapping_add(byte as usize);
    }
    hash
}

/// Open-addressed name -> descriptor table.
///
/// Capacity is fixed at twice the descriptor count, so the load factor never
/// exceeds 0.5 and every probe sequence terminates at an empty slot. Built
/// once, never resized or mutated afterwards.
#[derive(Debug)]
pub struct CommandTable {
    slots: Vec<Option<CommandDescriptor>>,
    len: usize,
}

impl CommandTable {
    /// Builds the table from one or more descriptor lists (typically the
    /// engine's builtins plus the caller's command set).
    pub fn build(lists: &[&[CommandDescriptor]]) -> Result<Self, BuildError> {
        let count: usize = lists.iter().map(|list| list.len()).sum();
        let mut table = Self {
            slots: vec![None; count * 2],
            len: 0,
        };

        for list in lists {
            for descriptor in *list {
                table.insert(*descriptor)?;
            }
        }

        Ok(table)
    }

    fn insert(&mut self, descriptor: CommandDescriptor) -> Result<(), BuildError> {
        if descriptor.name.is_empty() {
            return Err(BuildError::UnnamedCommand);
        }

        let mut slot = djb2(descriptor.name) % self.slots.len();

        // Load factor <= 0.5 guarantees the probe reaches a hole.
        while let Some(occupant) = &self.slots[slot] {
            if occupant.name == descriptor.name {
                return Err(BuildError::NameConflict { name: descriptor.name });
            }
            slot = (slot + 1) % self.slots.len();
        }

        self.slots[slot] = Some(descriptor);
        self.len += 1;
        Ok(())
    }

    /// Finds a descriptor by name, following the same hash/probe sequence as
    /// insertion.
    pub fn lookup(&self, name: &str) -> Option<&CommandDescriptor> {
        if self.slots.is_empty() {
            return None;
        }

        let mut slot = djb2(name) % self.slots.len();

        while let Some(occupant) = &self.slots[slot] {
            if occupant.name == name {
                return Some(occupant);
            }
            slot = (slot + 1) % self.slots.len();
        }

        None
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total slot count (always twice the descriptor count).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over the registered descriptors in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.slots.iter().filter_map(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut crate::Engine, _: &[String]) -> anyhow::Result<()> {
        Ok(())
    }

    fn descriptor(name: &'static str) -> CommandDescriptor {
        CommandDescriptor {
            name,
            arity: Arity::AtLeast(0),
            handler: noop,
        }
    }

    #[test]
    fn lookup_round_trips_every_name() {
        let names = ["push", "pop", "peek", "clear", "size", "streq", "expect"];
        let descriptors: Vec<_> = names.iter().map(|n| descriptor(n)).collect();
        let table = CommandTable::build(&[&descriptors]).unwrap();

        assert_eq!(table.len(), names.len());
        assert_eq!(table.capacity(), names.len() * 2);
        for name in names {
            assert_eq!(table.lookup(name).unwrap().name, name);
        }
    }

    #[test]
    fn lookup_misses_cleanly() {
        let table = CommandTable::build(&[&[descriptor("push")]]).unwrap();
        assert!(table.lookup("pop").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn duplicate_name_is_a_name_conflict() {
        let err = CommandTable::build(&[&[descriptor("push"), descriptor("push")]])
            .unwrap_err();
        assert_eq!(err, BuildError::NameConflict { name: "push" });
        assert_eq!(err.status(), Status::NameConflict);
    }

    #[test]
    fn duplicate_across_lists_is_detected() {
        let a = [descriptor("push")];
        let b = [descriptor("pop"), descriptor("push")];
        let err = CommandTable::build(&[&a, &b]).unwrap_err();
        assert_eq!(err, BuildError::NameConflict { name: "push" });
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = CommandTable::build(&[&[descriptor("")]]).unwrap_err();
        assert_eq!(err, BuildError::UnnamedCommand);
        assert_eq!(err.status(), Status::NoCommandName);
    }

    #[test]
    fn empty_table_is_usable() {
        let table = CommandTable::build(&[]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), 0);
        assert!(table.lookup("anything").is_none());
    }

    #[test]
    fn names_are_case_sensitive() {
        let table = CommandTable::build(&[&[descriptor("Push"), descriptor("push")]]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("Push").unwrap().name, "Push");
        assert_eq!(table.lookup("push").unwrap().name, "push");
    }

    #[test]
    fn colliding_names_probe_to_distinct_slots() {
        // With capacity 4, at least two of these hashes collide modulo 4;
        // linear probing must still keep every descriptor reachable.
        let names = ["a", "e"]; // djb2("a") = 177670, djb2("e") = 177674
        let descriptors: Vec<_> = names.iter().map(|n| descriptor(n)).collect();
        let table = CommandTable::build(&[&descriptors]).unwrap();
        for name in names {
            assert_eq!(table.lookup(name).unwrap().name, name);
        }
    }

    #[test]
    fn iter_yields_every_descriptor_once() {
        let descriptors = [descriptor("one"), descriptor("two"), descriptor("three")];
        let table = CommandTable::build(&[&descriptors]).unwrap();
        let mut seen: Vec<_> = table.iter().map(|d| d.name).collect();
        seen.sort_unstable();
        assert_eq!(seen, ["one", "three", "two"]);
    }

    #[test]
    fn arity_admits() {
        assert!(Arity::Exact(2).admits(2));
        assert!(!Arity::Exact(2).admits(1));
        assert!(!Arity::Exact(2).admits(3));
        assert!(Arity::AtLeast(1).admits(1));
        assert!(Arity::AtLeast(1).admits(5));
        assert!(!Arity::AtLeast(1).admits(0));
    }
}
