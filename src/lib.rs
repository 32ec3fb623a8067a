//! # LogicLoom
//!
//! Exact two-level (sum-of-products) minimization of a single boolean
//! function given as a list of minterm indices.
//!
//! ## Overview
//!
//! The engine runs the classic exact pipeline and keeps every intermediate
//! artifact so results can be explained, not just printed:
//!
//! 1. **Quine-McCluskey reduction** ([`reduce`]) turns minterms into prime implicants
//! 2. **Chart construction** ([`chart`]) relates minterms to the primes covering them
//! 3. **Essential extraction** ([`chart::essentials`]) picks primes that are the sole cover of some minterm
//! 4. **Petrick's method** ([`petrick`]) finds every minimum-literal completion
//!
//! ## Quick Start
//!
//! ```
//! use logicloom::Simplifier;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let simplifier = Simplifier::new(&[0, 2, 4, 5, 6], &["x", "y", "z"])?;
//!
//! let cover = simplifier.simplify()?;
//! println!("{}", simplifier.equation()?); // F(x,y,z) = z′ + x·y′
//! assert_eq!(cover.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! Comma-separated input is accepted as well:
//!
//! ```
//! use logicloom::Simplifier;
//!
//! # fn main() -> Result<(), logicloom::LoomError> {
//! let simplifier = Simplifier::from_strings("A, B, C, D", "2, 3, 6, 7, 12, 13, 14")?;
//! for equation in simplifier.all_equations()? {
//!     println!("{}", equation.latex);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Ties
//!
//! A function can have several covers of the same minimum cost.
//! [`Simplifier::all_minimal_covers`] returns all of them;
//! [`Simplifier::simplify`] returns the first in a fixed order (Petrick
//! selection compared by sorted bit-patterns), so repeated runs agree.
//!
//! ## Long Searches
//!
//! Petrick's method is exponential in the worst case. [`SimplifierConfig`]
//! bounds it by time or candidate count, and a [`CancelToken`] stops it from
//! another thread. Aborted runs are not cached.
//!
//! ## Logging
//!
//! Stage boundaries are logged through the [`log`](https://docs.rs/log)
//! facade at `debug` level and per-merge detail at `trace`. Install any
//! logger to see them.

pub mod chart;
pub mod cover;
pub mod demos;
pub mod error;
pub mod input;
pub mod petrick;
pub mod reduce;
pub mod render;
pub mod simplifier;
pub mod term;

pub use chart::{ChartData, CoverageChart, Essentials};
pub use cover::Cover;
pub use error::LoomError;
pub use input::{ParseError, Problem, ValidationError};
pub use petrick::{CancelToken, CoverSolver, MinimizeError};
pub use render::{Equation, Notation};
pub use simplifier::{Simplifier, Solution};
pub use term::Term;

use std::time::Duration;

/// Limits for the cover search
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimplifierConfig {
    /// Abort once more than this many candidate selections are retained
    pub candidate_limit: Option<usize>,
    /// Abort once the cover search has run this long
    pub time_limit: Option<Duration>,
}

impl SimplifierConfig {
    /// Create a configuration with no limits
    pub fn new() -> Self {
        Self::default()
    }
}
