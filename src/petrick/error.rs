//! Error types for the minimization pipeline

use std::fmt;
use std::io;
use std::time::Duration;

/// Errors that can occur while computing prime implicants and covers
///
/// Only [`MinimizeError::InternalConsistency`] indicates a defect; the other
/// variants come from the caller's cancellation and budget hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizeError {
    /// A residual minterm has no covering prime implicant
    ///
    /// This cannot happen for a correct reduction and is never retried.
    InternalConsistency {
        /// The uncovered minterm
        minterm: u64,
    },
    /// The attached [`CancelToken`](crate::CancelToken) was triggered
    Cancelled,
    /// Cover search exceeded the configured time limit
    TimedOut {
        /// The configured limit
        limit: Duration,
    },
    /// The retained candidate set grew beyond the configured bound
    CandidateLimitExceeded {
        /// The configured bound
        limit: usize,
    },
}

impl MinimizeError {
    /// True for the defect variant, false for caller-requested aborts
    pub fn is_internal(&self) -> bool {
        matches!(self, MinimizeError::InternalConsistency { .. })
    }
}

impl fmt::Display for MinimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizeError::InternalConsistency { minterm } => write!(
                f,
                "Internal consistency failure: minterm {} is not covered by any prime implicant",
                minterm
            ),
            MinimizeError::Cancelled => write!(f, "Cover search was cancelled"),
            MinimizeError::TimedOut { limit } => {
                write!(f, "Cover search exceeded the time limit of {:?}", limit)
            }
            MinimizeError::CandidateLimitExceeded { limit } => write!(
                f,
                "Cover search exceeded the limit of {} candidate selections",
                limit
            ),
        }
    }
}

impl std::error::Error for MinimizeError {}

impl From<MinimizeError> for io::Error {
    fn from(err: MinimizeError) -> Self {
        match err {
            MinimizeError::Cancelled => io::Error::new(io::ErrorKind::Interrupted, err),
            MinimizeError::TimedOut { .. } => io::Error::new(io::ErrorKind::TimedOut, err),
            _ => io::Error::other(err),
        }
    }
}
