//! Error types for problem construction

use std::fmt;
use std::io;
use std::sync::Arc;

/// Semantic problems with an otherwise well-formed input
///
/// These are reported before any reduction work begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A minterm index does not fit in `[0, 2^n)`
    MintermOutOfRange {
        /// The offending minterm index
        minterm: u64,
        /// Number of variables the function is defined over
        num_variables: usize,
    },
    /// A minterm token parsed to a negative integer
    NegativeMinterm {
        /// The negative value
        value: i64,
    },
    /// Minterms were given but no variables to index them
    MissingVariables {
        /// Number of (deduplicated) minterms supplied
        num_minterms: usize,
    },
    /// The same variable name appears more than once
    DuplicateVariable {
        /// The repeated name
        name: Arc<str>,
    },
    /// A variable name is empty or whitespace only
    EmptyVariableName {
        /// Zero-based position in the variable list
        position: usize,
    },
    /// More variables than minterm indices can address
    TooManyVariables {
        /// Number of variables supplied
        count: usize,
        /// The largest supported variable count
        max: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MintermOutOfRange {
                minterm,
                num_variables,
            } => write!(
                f,
                "Minterm {} out of range for {} variable(s) (valid range: 0..{})",
                minterm,
                num_variables,
                1u128 << num_variables
            ),
            ValidationError::NegativeMinterm { value } => {
                write!(f, "Minterm {} is negative", value)
            }
            ValidationError::MissingVariables { num_minterms } => write!(
                f,
                "{} minterm(s) given but the variable list is empty",
                num_minterms
            ),
            ValidationError::DuplicateVariable { name } => {
                write!(f, "Variable '{}' is listed more than once", name)
            }
            ValidationError::EmptyVariableName { position } => {
                write!(f, "Variable name at position {} is empty", position)
            }
            ValidationError::TooManyVariables { count, max } => write!(
                f,
                "Too many variables: {} given, at most {} supported",
                count, max
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for io::Error {
    fn from(err: ValidationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Malformed comma-separated input
///
/// Raised by the string factories only; it concerns the textual form, not
/// the meaning of the values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A minterm token is not an integer
    InvalidMinterm {
        /// The token after trimming
        token: String,
        /// Zero-based token position
        position: usize,
    },
    /// Two consecutive commas (or a leading/trailing comma) in the minterm list
    EmptyMintermToken {
        /// Zero-based token position
        position: usize,
    },
    /// Two consecutive commas (or a leading/trailing comma) in the variable list
    EmptyVariableToken {
        /// Zero-based token position
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidMinterm { token, position } => write!(
                f,
                "Invalid minterm {:?} at position {}: expected a non-negative integer",
                token, position
            ),
            ParseError::EmptyMintermToken { position } => {
                write!(f, "Empty minterm at position {}", position)
            }
            ParseError::EmptyVariableToken { position } => {
                write!(f, "Empty variable name at position {}", position)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
