//! The raise mechanism: typed, non-local error propagation.
//!
//! A handler aborts by returning an error that carries a [`Status`]. The
//! error travels up the native call stack inside [`anyhow::Error`] and is
//! caught at the nearest enclosing [`Engine::invoke`](crate::Engine::invoke)
//! boundary, which turns it back into a plain status. Each invocation is its
//! own unwind scope; nested invocations cannot clobber an outer one.

use crate::status::Status;
use std::fmt;

/// A raised status with a human-readable report.
///
/// Construct with the [`raise!`] or [`check!`] macros inside a handler. The
/// invocation boundary downcasts it out of the [`anyhow::Error`] wrapper;
/// any other error cause is classified as [`Status::Error`].
#[derive(Debug, Clone)]
pub struct Raise {
    status: Status,
    message: String,
}

impl Raise {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Raise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Raise {}

/// Classifies an error that escaped a handler.
pub fn status_of(err: &anyhow::Error) -> Status {
    err.downcast_ref::<Raise>()
        .map(Raise::status)
        .unwrap_or(Status::Error)
}

/// Aborts the current handler with a status and a formatted report.
///
/// # Usage
/// ```ignore
/// raise!(Status::Error, "strings \"{}\" and \"{}\" differ", a, b);
/// ```
#[macro_export]
macro_rules! raise {
    ($status:expr, $($arg:tt)*) => {
        return Err(anyhow::anyhow!($crate::Raise::new($status, format!($($arg)*))))
    };
}

/// Raises a status unless the condition holds.
///
/// With only a condition, the report is the stringified condition itself;
/// an optional format string overrides it.
#[macro_export]
macro_rules! check {
    ($status:expr, $cond:expr) => {
        if !$cond {
            $crate::raise!($status, "failed check \"{}\"", stringify!($cond));
        }
    };
    ($status:expr, $cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::raise!($status, $($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_macro_carries_status_and_message() {
        fn handler() -> anyhow::Result<()> {
            raise!(Status::FatalError, "gave up after {} tries", 3);
        }
        let err = handler().unwrap_err();
        let raise = err.downcast_ref::<Raise>().unwrap();
        assert_eq!(raise.status(), Status::FatalError);
        assert_eq!(raise.message(), "gave up after 3 tries");
    }

    #[test]
    fn check_macro_stringifies_condition() {
        fn handler(n: usize) -> anyhow::Result<()> {
            check!(Status::Error, n < 10);
            Ok(())
        }
        assert!(handler(5).is_ok());
        let err = handler(20).unwrap_err();
        let raise = err.downcast_ref::<Raise>().unwrap();
        assert_eq!(raise.status(), Status::Error);
        assert_eq!(raise.message(), "failed check \"n < 10\"");
    }

    #[test]
    fn check_macro_with_custom_message() {
        fn handler() -> anyhow::Result<()> {
            check!(Status::Error, 1 == 2, "custom report");
            Ok(())
        }
        assert_eq!(
            handler().unwrap_err().downcast_ref::<Raise>().unwrap().message(),
            "custom report"
        );
    }

    #[test]
    fn foreign_errors_classify_as_error() {
        let err = anyhow::anyhow!("something else entirely");
        assert_eq!(status_of(&err), Status::Error);
    }

    #[test]
    fn raise_classifies_to_its_status() {
        let err = anyhow::Error::new(Raise::new(Status::NoMemory, "oom"));
        assert_eq!(status_of(&err), Status::NoMemory);
    }
}
