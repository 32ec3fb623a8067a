//! Crate-level error type
//!
//! Each stage has its own error enum ([`ValidationError`], [`ParseError`],
//! [`MinimizeError`]). [`LoomError`] wraps them so a caller can chain parsing,
//! solving and rendering with `?`.

use crate::input::{ParseError, ValidationError};
use crate::petrick::MinimizeError;
use std::fmt;
use std::io;

/// Any error produced by the library
#[derive(Debug)]
pub enum LoomError {
    /// Semantically invalid input
    Validation(ValidationError),
    /// Malformed comma-separated input
    Parse(ParseError),
    /// Failure during minimization
    Minimize(MinimizeError),
    /// IO error while writing a rendered artifact
    Io(io::Error),
}

impl fmt::Display for LoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoomError::Validation(e) => write!(f, "Invalid input: {}", e),
            LoomError::Parse(e) => write!(f, "Parse error: {}", e),
            LoomError::Minimize(e) => write!(f, "Minimization error: {}", e),
            LoomError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for LoomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoomError::Validation(e) => Some(e),
            LoomError::Parse(e) => Some(e),
            LoomError::Minimize(e) => Some(e),
            LoomError::Io(e) => Some(e),
        }
    }
}

impl From<ValidationError> for LoomError {
    fn from(err: ValidationError) -> Self {
        LoomError::Validation(err)
    }
}

impl From<ParseError> for LoomError {
    fn from(err: ParseError) -> Self {
        LoomError::Parse(err)
    }
}

impl From<MinimizeError> for LoomError {
    fn from(err: MinimizeError) -> Self {
        LoomError::Minimize(err)
    }
}

impl From<io::Error> for LoomError {
    fn from(err: io::Error) -> Self {
        LoomError::Io(err)
    }
}

impl From<LoomError> for io::Error {
    fn from(err: LoomError) -> Self {
        match err {
            LoomError::Validation(e) => e.into(),
            LoomError::Parse(e) => e.into(),
            LoomError::Minimize(e) => e.into(),
            LoomError::Io(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_from_validation_error() {
        let err: LoomError = ValidationError::NegativeMinterm { value: -1 }.into();
        assert!(matches!(err, LoomError::Validation(_)));
        assert!(err.to_string().starts_with("Invalid input"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_minimize_error() {
        let err: LoomError = MinimizeError::InternalConsistency { minterm: 3 }.into();
        assert!(matches!(err, LoomError::Minimize(_)));
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn test_parse_error_round_trips_kind() {
        let err: LoomError = ParseError::EmptyMintermToken { position: 0 }.into();
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
