use std::{
    fmt,
    io::{self, Write},
    sync::Arc,
};
use tracing::debug;

/// Presentation class of a user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fire-and-forget sink for user-facing messages.
pub trait Notifier {
    fn emit(&self, message: &str, severity: Severity);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn emit(&self, message: &str, severity: Severity) {
        (**self).emit(message, severity);
    }
}

/// Prints messages for a terminal user. Successes go to stdout, everything else
/// to stderr. The log copy stays at debug so the default filter never repeats it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    fn write_line<W: Write>(mut out: W, message: &str, severity: Severity) {
        debug!(%severity, "{message}");

        let line = match severity {
            Severity::Success => writeln!(out, "{message}"),
            Severity::Warning | Severity::Error => writeln!(out, "{severity}: {message}"),
        };
        if let Err(err) = line {
            debug!("Unable to print {severity} message: {err}");
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn emit(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => Self::write_line(io::stdout().lock(), message, severity),
            Severity::Warning | Severity::Error => {
                Self::write_line(io::stderr().lock(), message, severity);
            }
        }
    }
}
