//! Formatter error type.

use std::io;

/// Failure while formatting a request. Reading the body is the only fallible step.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("body read failed: {0}")]
    BodyRead(#[source] io::Error),
}
