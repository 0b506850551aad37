use std::fmt;
use std::str::FromStr;

/// The outcome of a command invocation or of a whole script run.
///
/// Numeric codes are stable: scripts refer to statuses by number as well as
/// by name (`expect 1 streq foo bar`), and the process exit code is the code
/// of the run's overall status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Ok = 0,
    Error = 1,
    NoMemory = 2,
    FatalError = 3,
    MemoryLeak = 4,
    MemoryError = 5,
    IOError = 6,
    SyntaxError = 7,
    CommandLineArgError = 8,
    HelpRequested = 9,
    ListCommands = 10,
    NoSuchCommand = 11,
    /// Reserved for descriptor lists with a missing handler. Unproducible
    /// here (handlers are mandatory), kept so the numbering stays stable.
    NoCommandHandler = 12,
    NoCommandName = 13,
    NameConflict = 14,
    ArgCountMismatch = 15,
    UnexpectedSuccess = 16,
}

/// Every status, in code order.
pub const ALL_STATUSES: [Status; 17] = [
    Status::Ok,
    Status::Error,
    Status::NoMemory,
    Status::FatalError,
    Status::MemoryLeak,
    Status::MemoryError,
    Status::IOError,
    Status::SyntaxError,
    Status::CommandLineArgError,
    Status::HelpRequested,
    Status::ListCommands,
    Status::NoSuchCommand,
    Status::NoCommandHandler,
    Status::NoCommandName,
    Status::NameConflict,
    Status::ArgCountMismatch,
    Status::UnexpectedSuccess,
];

impl Status {
    /// The stable numeric code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Looks a status up by its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        ALL_STATUSES.get(code as usize).copied()
    }

    /// The canonical script-facing name.
    pub fn name(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Error => "error",
            Status::NoMemory => "no-memory",
            Status::FatalError => "fatal-error",
            Status::MemoryLeak => "memory-leak",
            Status::MemoryError => "memory-error",
            Status::IOError => "io-error",
            Status::SyntaxError => "syntax-error",
            Status::CommandLineArgError => "command-line-arg-error",
            Status::HelpRequested => "help-requested",
            Status::ListCommands => "list-commands",
            Status::NoSuchCommand => "no-such-command",
            Status::NoCommandHandler => "no-command-handler",
            Status::NoCommandName => "no-command-name",
            Status::NameConflict => "name-conflict",
            Status::ArgCountMismatch => "arg-count-mismatch",
            Status::UnexpectedSuccess => "unexpected-success",
        }
    }

    /// The process exit code for a run that finished with this status.
    ///
    /// Help and command listing are informational outcomes, not failures.
    pub fn exit_code(self) -> i32 {
        match self {
            Status::HelpRequested | Status::ListCommands => 0,
            other => other.code() as i32,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A status string that is neither a known name nor a valid code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStatus(pub String);

impl fmt::Display for InvalidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid status \"{}\"", self.0)
    }
}

impl std::error::Error for InvalidStatus {}

impl FromStr for Status {
    type Err = InvalidStatus;

    /// Parses a status from its decimal code or its case-insensitive name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u8>() {
            return Status::from_code(code).ok_or_else(|| InvalidStatus(s.to_string()));
        }
        let lowered = s.to_ascii_lowercase();
        ALL_STATUSES
            .into_iter()
            .find(|status| status.name() == lowered)
            .ok_or_else(|| InvalidStatus(s.to_string()))
    }
}
