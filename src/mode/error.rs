//! Mode finder error definitions

use std::error::Error;
use std::fmt;

/// Mode finder error types
#[derive(Debug, PartialEq, Eq)]
pub enum ModeError {
    /// The input sequence had no elements, so no mode exists
    EmptyInput,
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeError::EmptyInput => {
                write!(f, "Invalid argument: mode of an empty sequence is undefined")
            }
        }
    }
}

impl Error for ModeError {}

/// Result type for mode operations
pub type ModeResult<T> = Result<T, ModeError>;
