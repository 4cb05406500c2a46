use std::error::Error as StdError;
use std::fmt;
use std::io;

use tracing_error::{SpanTrace, SpanTraceStatus};

/* 📖 # Why a custom error type and not anyhow/eyre/thiserror?

- The only failure ridge can hit is a broken standard output, which fits in two variants
- Errors carry a span trace, so the log context of a failed write is never lost
- Context strings stay inspectable instead of being flattened into one message
 */

/// Error variants that can occur in ridge operations.
#[derive(Debug)]
pub enum ErrorKind {
    /// Writing to or flushing standard output failed
    OutputError { source: io::Error },

    /// Catch-all for other errors with a message
    Message { message: String },
}

/* 📖 # Why separate ErrorKind and RidgeError?

ErrorKind holds the structural variant callers match on.
RidgeError wraps it with the context strings attached during propagation and the
span trace captured where the error was created.
*/

/// Error type wrapping an [`ErrorKind`] with context and a captured span trace.
pub struct RidgeError {
    kind: ErrorKind,
    context: Vec<String>,
    span_trace: SpanTrace,
}

impl RidgeError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            span_trace: SpanTrace::capture(),
        }
    }

    /// Creates a [`ErrorKind::Message`] error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Attaches context to an error.
    /// Context is displayed before the error message.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Context strings in the order they were attached.
    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// Returns the innermost error in the source chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    fn fmt_kind(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::OutputError { source } => {
                write!(f, "Failed to write to standard output: {}", source)
            }
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

impl From<ErrorKind> for RidgeError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<io::Error> for RidgeError {
    fn from(source: io::Error) -> Self {
        Self::new(ErrorKind::OutputError { source })
    }
}

impl StdError for RidgeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::OutputError { source } => Some(source),
            ErrorKind::Message { .. } => None,
        }
    }
}

impl fmt::Display for RidgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in &self.context {
            write!(f, "{}: ", ctx)?;
        }
        self.fmt_kind(f)
    }
}

impl fmt::Debug for RidgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_kind(f)?;
        writeln!(f)?;
        let last = self.context.len().saturating_sub(1);
        for (i, ctx) in self.context.iter().enumerate() {
            let branch = if i == last { "└─" } else { "├─" };
            writeln!(f, "{} {}", branch, ctx)?;
        }
        // Only a subscriber with an ErrorLayer and an entered span yields a trace
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            writeln!(f, "Trace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/// Standard result type for ridge operations.
///
/// The error is boxed to keep the `Ok` path small.
pub type RidgeResult<T> = std::result::Result<T, Box<RidgeError>>;

/// Extension trait for attaching context to results during propagation.
pub trait ResultExt<T> {
    /// Attaches context to an error; evaluated eagerly.
    fn context(self, context: impl Into<String>) -> RidgeResult<T>;

    /// Attaches context that is only built if the result is an error.
    fn with_context<F>(self, f: F) -> RidgeResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for RidgeResult<T> {
    fn context(self, context: impl Into<String>) -> RidgeResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> RidgeResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}
