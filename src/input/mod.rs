//! Validated minimization input
//!
//! A [`Problem`] is the checked pair of minterm indices and variable names
//! that every later stage works from. It is built either from typed lists
//! ([`Problem::new`]) or from comma-separated text ([`Problem::from_strings`]).
//! All checks happen here, before any reduction work.

mod error;

pub use error::{ParseError, ValidationError};

use crate::error::LoomError;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// Largest supported variable count (minterm indices are `u64`)
pub const MAX_VARIABLES: usize = 63;

/// A validated single-output minimization problem
///
/// Minterms are deduplicated and sorted ascending; variable names are
/// distinct and non-empty.
///
/// # Examples
///
/// ```
/// use logicloom::Problem;
///
/// let problem = Problem::new(&[6, 0, 2, 2], &["x", "y", "z"])?;
/// assert_eq!(problem.minterms(), &[0, 2, 6]);
/// assert_eq!(problem.num_variables(), 3);
/// # Ok::<(), logicloom::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    minterms: Vec<u64>,
    variables: Vec<Arc<str>>,
}

impl Problem {
    /// Validate minterm indices against the variable list
    ///
    /// Duplicate minterms are dropped silently.
    pub fn new<S: AsRef<str>>(minterms: &[u64], variables: &[S]) -> Result<Self, ValidationError> {
        let variables = validate_variables(variables)?;
        let n = variables.len();

        let minterms: Vec<u64> = minterms
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if n == 0 && !minterms.is_empty() {
            return Err(ValidationError::MissingVariables {
                num_minterms: minterms.len(),
            });
        }

        // Sorted, so only the largest can be out of range
        if let Some(&max) = minterms.last() {
            if max >> n != 0 {
                return Err(ValidationError::MintermOutOfRange {
                    minterm: max,
                    num_variables: n,
                });
            }
        }

        Ok(Problem {
            minterms,
            variables,
        })
    }

    /// Parse comma-separated variable names and minterm indices
    ///
    /// Tokens are whitespace-trimmed. A string that is blank after trimming
    /// yields an empty list; an empty token between commas is a
    /// [`ParseError`]. Parse errors take precedence over validation errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use logicloom::Problem;
    ///
    /// let problem = Problem::from_strings("w, x, y, z", "1, 4, 5")?;
    /// assert_eq!(problem.variables().len(), 4);
    /// assert!(Problem::from_strings("a,,b", "1").is_err());
    /// # Ok::<(), logicloom::LoomError>(())
    /// ```
    pub fn from_strings(variables: &str, minterms: &str) -> Result<Self, LoomError> {
        let names = parse_variables(variables)?;
        let parsed = parse_minterms(minterms)?;

        let mut values = Vec::with_capacity(parsed.len());
        for token in parsed {
            match token {
                MintermToken::Index(m) => values.push(m),
                MintermToken::Negative(value) => {
                    return Err(ValidationError::NegativeMinterm { value }.into())
                }
            }
        }

        Ok(Problem::new(&values, &names)?)
    }

    /// Minterm indices, ascending and duplicate free
    pub fn minterms(&self) -> &[u64] {
        &self.minterms
    }

    /// Variable names, first name = most significant bit
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// Number of variables `n`
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// True when no minterm is set (the constant-false function)
    pub fn is_empty(&self) -> bool {
        self.minterms.is_empty()
    }
}

fn validate_variables<S: AsRef<str>>(variables: &[S]) -> Result<Vec<Arc<str>>, ValidationError> {
    if variables.len() > MAX_VARIABLES {
        return Err(ValidationError::TooManyVariables {
            count: variables.len(),
            max: MAX_VARIABLES,
        });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(variables.len());
    let mut names = Vec::with_capacity(variables.len());
    for (position, var) in variables.iter().enumerate() {
        let name = var.as_ref();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyVariableName { position });
        }
        if !seen.insert(name) {
            return Err(ValidationError::DuplicateVariable {
                name: Arc::from(name),
            });
        }
        names.push(Arc::from(name));
    }
    Ok(names)
}

enum MintermToken {
    Index(u64),
    Negative(i64),
}

/// Split on commas, trimming each token; blank input means no tokens
fn tokens(input: &str) -> Vec<&str> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input.split(',').map(str::trim).collect()
}

fn parse_variables(input: &str) -> Result<Vec<&str>, ParseError> {
    let tokens = tokens(input);
    if let Some(position) = tokens.iter().position(|t| t.is_empty()) {
        return Err(ParseError::EmptyVariableToken { position });
    }
    Ok(tokens)
}

fn parse_minterms(input: &str) -> Result<Vec<MintermToken>, ParseError> {
    tokens(input)
        .into_iter()
        .enumerate()
        .map(|(position, token)| {
            if token.is_empty() {
                return Err(ParseError::EmptyMintermToken { position });
            }
            if let Ok(m) = token.parse::<u64>() {
                return Ok(MintermToken::Index(m));
            }
            match token.parse::<i64>() {
                Ok(value) if value < 0 => Ok(MintermToken::Negative(value)),
                _ => Err(ParseError::InvalidMinterm {
                    token: token.to_string(),
                    position,
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_and_dedups() {
        let p = Problem::new(&[5, 1, 5, 3], &["a", "b", "c"]).unwrap();
        assert_eq!(p.minterms(), &[1, 3, 5]);
        assert_eq!(p.variables()[0].as_ref(), "a");
    }

    #[test]
    fn test_out_of_range() {
        let err = Problem::new(&[0, 8], &["a", "b", "c"]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MintermOutOfRange {
                minterm: 8,
                num_variables: 3
            }
        );
    }

    #[test]
    fn test_boundary_minterm_accepted() {
        assert!(Problem::new(&[7], &["a", "b", "c"]).is_ok());
    }

    #[test]
    fn test_missing_variables() {
        let vars: [&str; 0] = [];
        let err = Problem::new(&[0], &vars).unwrap_err();
        assert_eq!(err, ValidationError::MissingVariables { num_minterms: 1 });
    }

    #[test]
    fn test_no_variables_no_minterms_is_valid() {
        let vars: [&str; 0] = [];
        let p = Problem::new(&[], &vars).unwrap();
        assert!(p.is_empty());
        assert_eq!(p.num_variables(), 0);
    }

    #[test]
    fn test_duplicate_variable() {
        let err = Problem::new(&[0], &["a", "b", "a"]).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateVariable { ref name } if name.as_ref() == "a"));
    }

    #[test]
    fn test_empty_variable_name() {
        let err = Problem::new(&[0], &["a", " "]).unwrap_err();
        assert_eq!(err, ValidationError::EmptyVariableName { position: 1 });
    }

    #[test]
    fn test_too_many_variables() {
        let names: Vec<String> = (0..64).map(|i| format!("v{}", i)).collect();
        let err = Problem::new(&[], &names).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooManyVariables { count: 64, max: 63 }
        );
    }

    #[test]
    fn test_max_variables_accepts_top_index() {
        let names: Vec<String> = (0..63).map(|i| format!("v{}", i)).collect();
        assert!(Problem::new(&[(1u64 << 63) - 1], &names).is_ok());
        assert!(Problem::new(&[1u64 << 63], &names).is_err());
    }

    #[test]
    fn test_from_strings_trims() {
        let p = Problem::from_strings(" x , y ,z", " 0, 2 ,4,5,6 ").unwrap();
        assert_eq!(p.variables().len(), 3);
        assert_eq!(p.variables()[1].as_ref(), "y");
        assert_eq!(p.minterms(), &[0, 2, 4, 5, 6]);
    }

    #[test]
    fn test_from_strings_blank_minterms() {
        let p = Problem::from_strings("a,b", "   ").unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn test_from_strings_empty_minterm_token() {
        let err = Problem::from_strings("a,b", "1,,2").unwrap_err();
        assert!(matches!(
            err,
            LoomError::Parse(ParseError::EmptyMintermToken { position: 1 })
        ));
    }

    #[test]
    fn test_from_strings_trailing_comma() {
        let err = Problem::from_strings("a,b,", "1").unwrap_err();
        assert!(matches!(
            err,
            LoomError::Parse(ParseError::EmptyVariableToken { position: 2 })
        ));
    }

    #[test]
    fn test_from_strings_invalid_minterm() {
        let err = Problem::from_strings("a,b", "1,two").unwrap_err();
        assert!(matches!(
            err,
            LoomError::Parse(ParseError::InvalidMinterm { ref token, position: 1 }) if token == "two"
        ));
    }

    #[test]
    fn test_from_strings_negative_minterm() {
        let err = Problem::from_strings("a,b", "1,-3").unwrap_err();
        assert!(matches!(
            err,
            LoomError::Validation(ValidationError::NegativeMinterm { value: -3 })
        ));
    }

    #[test]
    fn test_from_strings_parse_before_validation() {
        // Duplicate variable and a malformed minterm: the parse error wins
        let err = Problem::from_strings("a,a", "x").unwrap_err();
        assert!(matches!(err, LoomError::Parse(_)));
    }

    #[test]
    fn test_from_strings_range_checked() {
        let err = Problem::from_strings("a,b", "0,4").unwrap_err();
        assert!(matches!(
            err,
            LoomError::Validation(ValidationError::MintermOutOfRange { minterm: 4, .. })
        ));
    }
}
