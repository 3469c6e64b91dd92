//! Error types for the interpreter crate.

use std::path::PathBuf;

use thiserror::Error;

/// Every failure a request can end with. None of them are retried; the
/// caller reports the message and may start a new request.
#[derive(Debug, Error)]
pub enum InterpreterError {
    /// The input file of a translation request does not exist.
    #[error("The input file '{}' was not found.", .path.display())]
    MissingInputFile { path: PathBuf },

    /// A read, write or append failed part way through a request.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file exists but could not be read or parsed.
    #[error("Invalid settings file '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl InterpreterError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        InterpreterError::Io {
            context: context.into(),
            source,
        }
    }
}

/// A convenience `Result` type alias using the crate's `InterpreterError` type.
pub type Result<T> = std::result::Result<T, InterpreterError>;

/// Attaches a description of the failed step to an `io::Result`.
pub(crate) trait IoContext<T> {
    fn io_context<F, S>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn io_context<F, S>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| InterpreterError::io(context(), e))
    }
}
