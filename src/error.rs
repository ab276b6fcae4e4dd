//! Error handling for the benchmark harness.
//!
//! All failures are fatal for a timing run: an invalid privacy parameter,
//! an out-of-range scale, or a rendering/I-O problem each abort the sweep.
//! There is no retry or partial-result policy, since timing experiments are
//! not meaningful under partial failure.

use std::fmt;
use std::io;

/// Benchmark harness error.
#[derive(Debug)]
pub enum Error {
    /// A privacy parameter or derived scale is outside the supported range.
    InvalidParameter(String),
    /// Filesystem failure while writing a report artifact.
    Io(io::Error),
    /// Plot rendering failure.
    Render(String),
    /// Report serialization failure.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Error::Io(err) => write!(f, "io error: {err}"),
            Error::Render(msg) => write!(f, "render error: {msg}"),
            Error::Json(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, Error>;
