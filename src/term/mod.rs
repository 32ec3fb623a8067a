//! Ternary product terms (cubes) for Quine-McCluskey reduction
//!
//! A [`Term`] is a fixed-length pattern over the input variables where each
//! position is one of:
//! - `Some(true)` - the variable appears as a true literal
//! - `Some(false)` - the variable appears complemented
//! - `None` - the variable is absent from the product
//!
//! Alongside the pattern, every term carries the set of original minterm
//! indices it was built from. Equality, ordering and hashing look at the
//! pattern only.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A product term: ternary bit-pattern plus the minterms it subsumes
///
/// Terms are immutable. New terms come either from a single minterm
/// ([`Term::from_minterm`]) or from merging two adjacent terms
/// ([`Term::try_merge`]).
///
/// # Examples
///
/// ```
/// use logicloom::Term;
///
/// let a = Term::from_minterm(4, 3); // 100
/// let b = Term::from_minterm(5, 3); // 101
/// let merged = a.try_merge(&b).unwrap();
///
/// assert_eq!(merged.to_string(), "10-");
/// assert_eq!(merged.covered().iter().copied().collect::<Vec<_>>(), vec![4, 5]);
/// ```
#[derive(Clone)]
pub struct Term {
    bits: Arc<[Option<bool>]>,
    covered: Arc<BTreeSet<u64>>,
}

impl Term {
    /// Build the all-literal term for `minterm` over `num_vars` variables
    ///
    /// The first variable is the most significant bit of the index.
    pub fn from_minterm(minterm: u64, num_vars: usize) -> Self {
        let bits: Arc<[Option<bool>]> = (0..num_vars)
            .map(|i| Some((minterm >> (num_vars - 1 - i)) & 1 == 1))
            .collect();
        Term {
            bits,
            covered: Arc::new(BTreeSet::from([minterm])),
        }
    }

    pub(crate) fn from_parts(bits: Arc<[Option<bool>]>, covered: Arc<BTreeSet<u64>>) -> Self {
        debug_assert!(!covered.is_empty());
        Term { bits, covered }
    }

    /// Merge two terms that differ in exactly one literal position
    ///
    /// Both terms must have their absent positions in the same places, and
    /// exactly one of the remaining positions must be `0` in one term and `1`
    /// in the other. That position becomes absent in the result and the
    /// covered minterm sets are united. Returns `None` otherwise.
    pub fn try_merge(&self, other: &Term) -> Option<Term> {
        if self.bits.len() != other.bits.len() {
            return None;
        }

        let mut diff = None;
        for (i, (a, b)) in self.bits.iter().zip(other.bits.iter()).enumerate() {
            match (a, b) {
                (None, None) => {}
                (Some(x), Some(y)) if x == y => {}
                (Some(_), Some(_)) if diff.is_none() => diff = Some(i),
                _ => return None,
            }
        }

        let pos = diff?;
        let mut bits = self.bits.to_vec();
        bits[pos] = None;
        let covered: BTreeSet<u64> = self.covered.union(&other.covered).copied().collect();
        Some(Term {
            bits: bits.into(),
            covered: Arc::new(covered),
        })
    }

    /// Number of variables this term is defined over
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for a term over zero variables
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The ternary pattern, most significant variable first
    pub fn bits(&self) -> &[Option<bool>] {
        &self.bits
    }

    /// Original minterm indices this term represents
    pub fn covered(&self) -> &BTreeSet<u64> {
        &self.covered
    }

    /// Number of `1` positions (used to bucket terms during reduction)
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|b| **b == Some(true)).count()
    }

    /// Number of absent positions
    pub fn absent(&self) -> usize {
        self.bits.iter().filter(|b| b.is_none()).count()
    }

    /// Literal cost: number of non-absent positions
    pub fn literal_count(&self) -> usize {
        self.bits.len() - self.absent()
    }

    /// True if every literal of this term agrees with the bits of `minterm`
    pub fn covers_minterm(&self, minterm: u64) -> bool {
        let n = self.bits.len();
        self.bits.iter().enumerate().all(|(i, bit)| match bit {
            None => true,
            Some(v) => ((minterm >> (n - 1 - i)) & 1 == 1) == *v,
        })
    }

    /// Pattern string such as `10-`
    pub fn pattern(&self) -> String {
        self.to_string()
    }

    /// Plain-text product of literals, e.g. `x·y′` for `10-` over `[x, y, z]`
    ///
    /// A term with no literals renders as the constant `1`.
    pub fn to_expression<S: AsRef<str>>(&self, variables: &[S]) -> String {
        let parts: Vec<String> = self
            .literals(variables)
            .map(|(var, value)| {
                if value {
                    var.to_string()
                } else {
                    format!("{}′", var)
                }
            })
            .collect();
        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join("·")
        }
    }

    /// LaTeX product of literals, e.g. `x \cdot \bar{y}` for `10-` over `[x, y, z]`
    pub fn to_latex<S: AsRef<str>>(&self, variables: &[S]) -> String {
        let parts: Vec<String> = self
            .literals(variables)
            .map(|(var, value)| {
                if value {
                    var.to_string()
                } else {
                    format!("\\bar{{{}}}", var)
                }
            })
            .collect();
        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join(" \\cdot ")
        }
    }

    fn literals<'a, S: AsRef<str>>(
        &'a self,
        variables: &'a [S],
    ) -> impl Iterator<Item = (&'a str, bool)> + 'a {
        self.bits
            .iter()
            .zip(variables.iter())
            .filter_map(|(bit, var)| bit.map(|v| (var.as_ref(), v)))
    }

    fn rank(bit: &Option<bool>) -> u8 {
        // '-' < '0' < '1', matching the pattern string's byte order
        match bit {
            None => 0,
            Some(false) => 1,
            Some(true) => 2,
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits
            .iter()
            .map(Term::rank)
            .cmp(other.bits.iter().map(Term::rank))
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter() {
            let c = match bit {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term({} {:?})", self, self.covered)
    }
}
