//! Sum-of-products covers built from prime implicants
//!
//! A [`Cover`] is an ordered list of prime implicants whose union covers the
//! function's on-set. Its cost is the total literal count.

use crate::render::Notation;
use crate::term::Term;
use std::collections::BTreeSet;

/// An ordered set of prime implicants forming a sum of products
///
/// The order is the presentation order: essential implicants first, then
/// the implicants chosen by Petrick's method.
///
/// # Examples
///
/// ```
/// use logicloom::Simplifier;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let simplifier = Simplifier::new(&[0, 2, 4, 5, 6], &["x", "y", "z"])?;
/// let cover = simplifier.simplify()?;
///
/// assert_eq!(cover.cost(), 3);
/// assert_eq!(cover.to_expression(&["x", "y", "z"]), "z′ + x·y′");
/// assert!(cover.evaluate(5));
/// assert!(!cover.evaluate(7));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Cover {
    implicants: Vec<Term>,
}

impl Cover {
    /// Create a cover from implicants in presentation order
    pub fn new(implicants: Vec<Term>) -> Self {
        Cover { implicants }
    }

    /// The implicants in presentation order
    pub fn implicants(&self) -> &[Term] {
        &self.implicants
    }

    /// Number of product terms
    pub fn len(&self) -> usize {
        self.implicants.len()
    }

    /// True for the empty sum (constant false)
    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    /// True if `term` (by pattern) is part of this cover
    pub fn contains(&self, term: &Term) -> bool {
        self.implicants.contains(term)
    }

    /// Total literal count over all implicants
    pub fn cost(&self) -> usize {
        self.implicants.iter().map(Term::literal_count).sum()
    }

    /// Union of the minterms covered by every implicant
    pub fn covered(&self) -> BTreeSet<u64> {
        self.implicants
            .iter()
            .flat_map(|t| t.covered().iter().copied())
            .collect()
    }

    /// Evaluate the sum of products at the assignment with index `assignment`
    pub fn evaluate(&self, assignment: u64) -> bool {
        self.implicants.iter().any(|t| t.covers_minterm(assignment))
    }

    /// Plain-text expression such as `z′ + x·y′`; the empty cover is `0`
    pub fn to_expression<S: AsRef<str>>(&self, variables: &[S]) -> String {
        self.render(variables, Notation::Text)
    }

    /// LaTeX expression such as `\bar{z} + x \cdot \bar{y}`
    pub fn to_latex<S: AsRef<str>>(&self, variables: &[S]) -> String {
        self.render(variables, Notation::Latex)
    }

    /// Render in the given notation
    pub fn render<S: AsRef<str>>(&self, variables: &[S], notation: Notation) -> String {
        if self.implicants.is_empty() {
            return "0".to_string();
        }
        self.implicants
            .iter()
            .map(|t| match notation {
                Notation::Text => t.to_expression(variables),
                Notation::Latex => t.to_latex(variables),
            })
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

impl<'a> IntoIterator for &'a Cover {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.implicants.iter()
    }
}
