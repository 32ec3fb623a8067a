//! Exact minimum cover search with Petrick's method
//!
//! Each residual minterm contributes a clause: the set of prime implicants
//! covering it. The product of those clauses is expanded into a sum of
//! products one clause at a time, keeping only selections that are not
//! supersets of another (absorption). What survives is exactly the set of
//! irredundant completions; those of least literal cost become the minimal
//! covers once the essential implicants are added.
//!
//! The expansion is the one step whose size can blow up. The caller's
//! [`CancelToken`] and time limit are checked for every candidate as it is
//! extended and absorbed, the candidate bound after every clause.

mod error;

pub use error::MinimizeError;

use crate::chart::{CoverageChart, Essentials};
use crate::cover::Cover;
use crate::term::Term;
use crate::SimplifierConfig;
use log::{debug, trace};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// A set of chart column indices
type Selection = BTreeSet<usize>;

/// Cooperative cancellation flag for long cover searches
///
/// Clones share the same flag, so one clone can be handed to another thread
/// and cancelled from there.
///
/// # Examples
///
/// ```
/// use logicloom::{CancelToken, MinimizeError, Simplifier};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let token = CancelToken::new();
/// let simplifier = Simplifier::new(&[0, 1, 2, 5, 6, 7], &["a", "b", "c"])?
///     .with_cancel_token(token.clone());
///
/// token.cancel();
/// assert_eq!(simplifier.solve().unwrap_err(), MinimizeError::Cancelled);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// True once [`cancel`](Self::cancel) has been called on any clone
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Petrick's method over the rows left uncovered by the essentials
pub struct CoverSolver<'a> {
    chart: &'a CoverageChart,
    essentials: &'a Essentials,
    config: SimplifierConfig,
    cancel: Option<CancelToken>,
}

impl<'a> CoverSolver<'a> {
    /// Create a solver for `chart` with its extracted `essentials`
    pub fn new(chart: &'a CoverageChart, essentials: &'a Essentials) -> Self {
        CoverSolver {
            chart,
            essentials,
            config: SimplifierConfig::default(),
            cancel: None,
        }
    }

    /// Apply time and candidate limits
    pub fn with_config(mut self, config: SimplifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Check `token` between expansion steps
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Find every minimum-cost cover containing all essential implicants
    ///
    /// The result is never empty and is ordered by the bit-patterns of the
    /// Petrick selection (sorted ascending, compared lexicographically), so
    /// the first entry is a deterministic representative.
    pub fn run(&self) -> Result<Vec<Cover>, MinimizeError> {
        let started = Instant::now();
        let clauses = self.clauses()?;

        let mut candidates: Vec<Selection> = vec![Selection::new()];
        for (step, clause) in clauses.iter().enumerate() {
            let interrupt = || self.checkpoint(started);
            interrupt()?;
            candidates = distribute(&candidates, clause, &interrupt)?;
            trace!(
                "petrick: clause {} {:?} -> {} candidate(s)",
                step,
                clause,
                candidates.len()
            );
            if let Some(limit) = self.config.candidate_limit {
                if candidates.len() > limit {
                    return Err(MinimizeError::CandidateLimitExceeded { limit });
                }
            }
        }
        self.checkpoint(started)?;

        let implicants = self.chart.implicants();
        let cost = |s: &Selection| -> usize {
            s.iter().map(|&c| implicants[c].literal_count()).sum()
        };
        let min_cost = candidates.iter().map(|s| cost(s)).min().unwrap_or(0);

        let mut selections: Vec<Vec<Term>> = candidates
            .iter()
            .filter(|s| cost(*s) == min_cost)
            .map(|s| {
                let mut terms: Vec<Term> = s.iter().map(|&c| implicants[c].clone()).collect();
                terms.sort();
                terms
            })
            .collect();
        selections.sort();
        selections.dedup();

        debug!(
            "petrick: {} irredundant completion(s), {} of minimum cost {}",
            candidates.len(),
            selections.len(),
            min_cost
        );

        let essentials: Vec<Term> = self
            .essentials
            .columns
            .iter()
            .map(|&c| implicants[c].clone())
            .collect();

        Ok(selections
            .into_iter()
            .map(|selection| {
                let mut terms = essentials.clone();
                terms.extend(selection);
                Cover::new(terms)
            })
            .collect())
    }

    /// One clause per residual minterm, in ascending minterm order
    fn clauses(&self) -> Result<Vec<Vec<usize>>, MinimizeError> {
        self.essentials
            .residual
            .iter()
            .map(|&minterm| {
                let row = self
                    .chart
                    .minterms()
                    .binary_search(&minterm)
                    .map_err(|_| MinimizeError::InternalConsistency { minterm })?;
                let clause: Vec<usize> = self.chart.covering(row).collect();
                if clause.is_empty() {
                    return Err(MinimizeError::InternalConsistency { minterm });
                }
                Ok(clause)
            })
            .collect()
    }

    fn checkpoint(&self, started: Instant) -> Result<(), MinimizeError> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(MinimizeError::Cancelled);
        }
        if let Some(limit) = self.config.time_limit {
            if started.elapsed() >= limit {
                return Err(MinimizeError::TimedOut { limit });
            }
        }
        Ok(())
    }
}

/// Checked once per candidate while expanding
type Interrupt<'f> = &'f dyn Fn() -> Result<(), MinimizeError>;

/// Multiply the current sum of products by one clause
fn distribute(
    candidates: &[Selection],
    clause: &[usize],
    interrupt: Interrupt<'_>,
) -> Result<Vec<Selection>, MinimizeError> {
    let mut product = Vec::with_capacity(candidates.len() * clause.len());
    for candidate in candidates {
        interrupt()?;
        // Already satisfied: every other extension would be absorbed by it
        if clause.iter().any(|c| candidate.contains(c)) {
            product.push(candidate.clone());
            continue;
        }
        for &col in clause {
            let mut extended = candidate.clone();
            extended.insert(col);
            product.push(extended);
        }
    }
    absorb(product, interrupt)
}

/// Drop duplicates and every selection that contains another
///
/// Survivors keep the order in which they were produced.
fn absorb(
    selections: Vec<Selection>,
    interrupt: Interrupt<'_>,
) -> Result<Vec<Selection>, MinimizeError> {
    let mut by_size: Vec<usize> = (0..selections.len()).collect();
    by_size.sort_by_key(|&i| selections[i].len());

    let mut kept: Vec<usize> = Vec::new();
    let mut keep = vec![false; selections.len()];
    for i in by_size {
        interrupt()?;
        if kept.iter().any(|&k| selections[k].is_subset(&selections[i])) {
            continue;
        }
        kept.push(i);
        keep[i] = true;
    }

    Ok(selections
        .into_iter()
        .zip(keep)
        .filter_map(|(s, k)| k.then_some(s))
        .collect())
}
