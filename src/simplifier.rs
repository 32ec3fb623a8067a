//! The minimization engine
//!
//! [`Simplifier`] ties the pipeline together:
//!
//! ```text
//! Problem -> prime_implicants -> CoverageChart -> select_essentials -> CoverSolver -> covers
//! ```
//!
//! The first query runs the whole pipeline and stores the result as an
//! immutable [`Solution`]; every later query reads that cached value.
//! Failed runs (cancellation, time limit, internal error) are not cached.

use crate::chart::{select_essentials, ChartData, CoverageChart, Essentials};
use crate::cover::Cover;
use crate::error::LoomError;
use crate::input::{Problem, ValidationError};
use crate::petrick::{CancelToken, CoverSolver, MinimizeError};
use crate::reduce::prime_implicants;
use crate::render::{Equation, Notation};
use crate::term::Term;
use crate::SimplifierConfig;
use log::debug;
use std::sync::{Arc, OnceLock};

/// All artifacts computed for one problem
///
/// Everything here is read-only and can be shared freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    prime_implicants: Vec<Term>,
    chart: CoverageChart,
    essentials: Essentials,
    essential_terms: Vec<Term>,
    covers: Vec<Cover>,
}

impl Solution {
    /// Prime implicants in discovery order
    pub fn prime_implicants(&self) -> &[Term] {
        &self.prime_implicants
    }

    /// The coverage chart
    pub fn chart(&self) -> &CoverageChart {
        &self.chart
    }

    /// Essential prime implicants, in the order they were found
    pub fn essentials(&self) -> &[Term] {
        &self.essential_terms
    }

    /// Minterms not covered by any essential implicant, ascending
    pub fn residual(&self) -> &[u64] {
        &self.essentials.residual
    }

    /// Every cover of minimum cost, deterministic order
    pub fn minimal_covers(&self) -> &[Cover] {
        &self.covers
    }

    /// The representative minimal cover (first of [`minimal_covers`](Self::minimal_covers))
    pub fn minimal_cover(&self) -> &Cover {
        // CoverSolver::run never returns an empty list
        &self.covers[0]
    }

    /// Literal cost shared by all minimal covers
    pub fn cost(&self) -> usize {
        self.minimal_cover().cost()
    }
}

/// Exact two-level minimizer for one boolean function
///
/// # Examples
///
/// ```
/// use logicloom::{Notation, Simplifier};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let simplifier = Simplifier::new(&[0, 2, 4, 5, 6], &["x", "y", "z"])?;
///
/// let primes: Vec<String> = simplifier
///     .prime_implicants()?
///     .iter()
///     .map(|t| t.to_string())
///     .collect();
/// assert_eq!(primes, vec!["10-", "--0"]);
///
/// let eq = simplifier.equation()?;
/// assert_eq!(eq.text, "F(x,y,z) = z′ + x·y′");
/// assert_eq!(eq.expression(Notation::Latex), "\\bar{z} + x \\cdot \\bar{y}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Simplifier {
    problem: Problem,
    config: SimplifierConfig,
    cancel: Option<CancelToken>,
    solution: OnceLock<Solution>,
}

impl Simplifier {
    /// Validate and wrap a minterm list over the named variables
    pub fn new<S: AsRef<str>>(minterms: &[u64], variables: &[S]) -> Result<Self, ValidationError> {
        Ok(Self::from_problem(Problem::new(minterms, variables)?))
    }

    /// Parse comma-separated variables and minterms
    ///
    /// ```
    /// use logicloom::Simplifier;
    ///
    /// let simplifier = Simplifier::from_strings("a,b", "0,1,2,3")?;
    /// assert_eq!(simplifier.simplify()?.to_expression(simplifier.variables()), "1");
    /// # Ok::<(), logicloom::LoomError>(())
    /// ```
    pub fn from_strings(variables: &str, minterms: &str) -> Result<Self, LoomError> {
        Ok(Self::from_problem(Problem::from_strings(variables, minterms)?))
    }

    /// Wrap an already validated problem
    pub fn from_problem(problem: Problem) -> Self {
        Simplifier {
            problem,
            config: SimplifierConfig::default(),
            cancel: None,
            solution: OnceLock::new(),
        }
    }

    /// Set search limits
    pub fn with_config(mut self, config: SimplifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach a cancellation token checked during cover search
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The validated input
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Variable names, most significant first
    pub fn variables(&self) -> &[Arc<str>] {
        self.problem.variables()
    }

    /// Run the pipeline once and return the cached result
    ///
    /// Later calls return the same [`Solution`] without recomputing.
    pub fn solve(&self) -> Result<&Solution, MinimizeError> {
        if let Some(solution) = self.solution.get() {
            return Ok(solution);
        }
        let solution = self.compute()?;
        Ok(self.solution.get_or_init(|| solution))
    }

    /// True once a solution has been cached
    pub fn is_solved(&self) -> bool {
        self.solution.get().is_some()
    }

    fn compute(&self) -> Result<Solution, MinimizeError> {
        let minterms = self.problem.minterms();
        let n = self.problem.num_variables();
        debug!(
            "simplify: {} minterm(s) over {} variable(s)",
            minterms.len(),
            n
        );

        let primes = prime_implicants(minterms, n);
        let chart = CoverageChart::build(minterms, &primes, n);
        let essentials = select_essentials(&chart);

        let mut solver = CoverSolver::new(&chart, &essentials).with_config(self.config.clone());
        if let Some(token) = &self.cancel {
            solver = solver.with_cancel_token(token.clone());
        }
        let covers = solver.run()?;

        let essential_terms = essentials
            .columns
            .iter()
            .map(|&c| primes[c].clone())
            .collect();

        Ok(Solution {
            prime_implicants: primes,
            chart,
            essentials,
            essential_terms,
            covers,
        })
    }

    /// The deterministic representative minimal cover
    pub fn simplify(&self) -> Result<&Cover, MinimizeError> {
        Ok(self.solve()?.minimal_cover())
    }

    /// Every minimal cover, representative first
    pub fn all_minimal_covers(&self) -> Result<&[Cover], MinimizeError> {
        Ok(self.solve()?.minimal_covers())
    }

    /// Prime implicants in discovery order
    pub fn prime_implicants(&self) -> Result<&[Term], MinimizeError> {
        Ok(self.solve()?.prime_implicants())
    }

    /// Essential prime implicants
    pub fn essentials(&self) -> Result<&[Term], MinimizeError> {
        Ok(self.solve()?.essentials())
    }

    /// The coverage chart
    pub fn chart(&self) -> Result<&CoverageChart, MinimizeError> {
        Ok(self.solve()?.chart())
    }

    /// The renderer-facing chart record with the plain-text marker
    pub fn chart_data(&self) -> Result<ChartData, MinimizeError> {
        Ok(self.solve()?.chart().data())
    }

    /// Equation for the representative minimal cover
    pub fn equation(&self) -> Result<Equation, MinimizeError> {
        Ok(Equation::new(self.simplify()?, self.variables()))
    }

    /// Equations for every minimal cover
    pub fn all_equations(&self) -> Result<Vec<Equation>, MinimizeError> {
        Ok(self
            .all_minimal_covers()?
            .iter()
            .map(|cover| Equation::new(cover, self.variables()))
            .collect())
    }

    /// Expression of the representative cover without the function header
    pub fn expression(&self, notation: Notation) -> Result<String, MinimizeError> {
        Ok(self.simplify()?.render(self.variables(), notation))
    }
}
