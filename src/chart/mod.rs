//! Prime implicant coverage chart
//!
//! The chart relates each input minterm (rows, ascending) to the prime
//! implicants (columns, discovery order) that cover it. [`CoverageChart`] is
//! the engine-side structure; [`ChartData`] is the plain record handed to
//! renderers.

pub mod essentials;

pub use essentials::{select_essentials, Essentials};

use crate::term::Term;
use std::collections::BTreeSet;

/// Default marker for covered cells in plain-text output
pub const TEXT_MARKER: &str = "x";

/// Default marker for covered cells in LaTeX output
pub const LATEX_MARKER: &str = r"$\checkmark$";

/// Minterm × prime implicant coverage matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageChart {
    num_variables: usize,
    minterms: Vec<u64>,
    implicants: Vec<Term>,
    matrix: Vec<Vec<bool>>,
}

impl CoverageChart {
    /// Build the chart for `minterms` against `implicants`
    ///
    /// Rows are sorted and deduplicated; column order follows `implicants`.
    pub fn build(minterms: &[u64], implicants: &[Term], num_variables: usize) -> Self {
        let minterms: Vec<u64> = minterms
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let matrix = minterms
            .iter()
            .map(|&m| implicants.iter().map(|pi| pi.covers_minterm(m)).collect())
            .collect();
        CoverageChart {
            num_variables,
            minterms,
            implicants: implicants.to_vec(),
            matrix,
        }
    }

    /// Row labels: input minterms, ascending
    pub fn minterms(&self) -> &[u64] {
        &self.minterms
    }

    /// Column labels: prime implicants in discovery order
    pub fn implicants(&self) -> &[Term] {
        &self.implicants
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.minterms.len()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.implicants.len()
    }

    /// True if column `col` covers row `row`
    ///
    /// Out-of-range indices are reported as not covered.
    pub fn is_covered(&self, row: usize, col: usize) -> bool {
        self.matrix
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Column indices covering row `row`
    pub fn covering(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.matrix
            .get(row)
            .into_iter()
            .flat_map(|r| r.iter().enumerate().filter(|(_, c)| **c).map(|(i, _)| i))
    }

    /// Export as a renderer record with the plain-text marker
    pub fn data(&self) -> ChartData {
        ChartData {
            minterms: self.minterms.clone(),
            minterm_patterns: self
                .minterms
                .iter()
                .map(|&m| Term::from_minterm(m, self.num_variables).to_string())
                .collect(),
            implicants: self.implicants.iter().map(Term::to_string).collect(),
            matrix: self.matrix.clone(),
            marker: TEXT_MARKER.to_string(),
        }
    }
}

/// Renderer-facing view of a [`CoverageChart`]
///
/// This is everything a presentation layer needs; it holds no engine state.
///
/// # Examples
///
/// ```
/// use logicloom::Simplifier;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let simplifier = Simplifier::new(&[0, 2, 4, 5, 6], &["x", "y", "z"])?;
/// let data = simplifier.chart_data()?.with_marker("#");
///
/// assert_eq!(data.minterms, vec![0, 2, 4, 5, 6]);
/// assert_eq!(data.implicants, vec!["10-", "--0"]);
/// assert_eq!(data.cell(3, 0), "#"); // minterm 5 is covered by 10-
/// assert_eq!(data.cell(3, 1), "");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartData {
    /// Row minterm indices, ascending
    pub minterms: Vec<u64>,
    /// Row minterms as full bit-patterns (e.g. `101`)
    pub minterm_patterns: Vec<String>,
    /// Column prime implicant bit-patterns (e.g. `10-`)
    pub implicants: Vec<String>,
    /// `matrix[row][col]` is true when the column covers the row
    pub matrix: Vec<Vec<bool>>,
    marker: String,
}

impl ChartData {
    /// Replace the symbol used for covered cells
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Symbol used for covered cells
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.minterms.len()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.implicants.len()
    }

    /// True if column `col` covers row `row`
    pub fn is_covered(&self, row: usize, col: usize) -> bool {
        self.matrix
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// The marker for a covered cell, empty otherwise
    pub fn cell(&self, row: usize, col: usize) -> &str {
        if self.is_covered(row, col) {
            &self.marker
        } else {
            ""
        }
    }
}
