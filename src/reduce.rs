//! Quine-McCluskey reduction to prime implicants
//!
//! Starting from one all-literal [`Term`] per minterm, each pass buckets the
//! current generation by its count of `1` literals and tries to merge every
//! pair drawn from adjacent buckets. Successful merges form the next
//! generation; terms that took part in no merge are prime. The loop stops at
//! the first generation that produces no merges. Each generation has one more
//! absent position than the last, so there are at most `n + 1` passes.

use crate::term::Term;
use log::{debug, trace};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

/// Compute the prime implicants of the function whose on-set is `minterms`
///
/// `minterms` must already be validated (distinct, each below `2^num_vars`).
/// The result is duplicate free and in order of discovery: earlier
/// generations first, and within a generation the order in which terms were
/// produced.
///
/// # Examples
///
/// ```
/// use logicloom::reduce::prime_implicants;
///
/// let primes = prime_implicants(&[0, 2, 4, 5, 6], 3);
/// let patterns: Vec<String> = primes.iter().map(|t| t.to_string()).collect();
/// assert_eq!(patterns, vec!["10-", "--0"]);
/// ```
pub fn prime_implicants(minterms: &[u64], num_vars: usize) -> Vec<Term> {
    let mut generation: Vec<Term> = minterms
        .iter()
        .map(|&m| Term::from_minterm(m, num_vars))
        .collect();
    let mut primes = Vec::new();
    let mut round = 0;

    while !generation.is_empty() {
        let pass = merge_generation(&generation);
        debug!(
            "reduce: generation {} has {} term(s), produced {} merged term(s)",
            round,
            generation.len(),
            pass.next.len()
        );

        primes.extend(
            generation
                .into_iter()
                .enumerate()
                .filter(|(i, _)| !pass.consumed.contains(i))
                .map(|(_, t)| t),
        );

        generation = pass.next;
        round += 1;
    }

    debug!("reduce: {} prime implicant(s)", primes.len());
    primes
}

/// Output of one merge pass over a generation
struct MergePass {
    /// The next generation, unique by pattern
    next: Vec<Term>,
    /// Positions in the input generation that took part in a merge
    consumed: HashSet<usize>,
}

fn merge_generation(generation: &[Term]) -> MergePass {
    let mut buckets: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (i, term) in generation.iter().enumerate() {
        buckets.entry(term.ones()).or_default().push(i);
    }

    let mut next: Vec<Term> = Vec::new();
    let mut index: HashMap<Term, usize> = HashMap::new();
    let mut consumed = HashSet::new();

    for (ones, low) in buckets.iter() {
        let Some(high) = buckets.get(&(ones + 1)) else {
            continue;
        };
        for &i in low {
            for &j in high {
                let Some(merged) = generation[i].try_merge(&generation[j]) else {
                    continue;
                };
                trace!(
                    "reduce: {} + {} => {}",
                    generation[i],
                    generation[j],
                    merged
                );
                consumed.insert(i);
                consumed.insert(j);

                match index.get(&merged) {
                    Some(&k) => next[k] = unite(&next[k], &merged),
                    None => {
                        index.insert(merged.clone(), next.len());
                        next.push(merged);
                    }
                }
            }
        }
    }

    MergePass { next, consumed }
}

/// Same pattern, union of both covered sets
fn unite(a: &Term, b: &Term) -> Term {
    if a.covered() == b.covered() {
        return a.clone();
    }
    let covered = a.covered().union(b.covered()).copied().collect();
    Term::from_parts(a.bits().into(), Arc::new(covered))
}
