//! Property tests for soundness, minimality and determinism

use logicloom::{Cover, Simplifier, Term};
use proptest::collection::btree_set;
use proptest::prelude::*;
use std::collections::BTreeSet;

const NAMES: [&str; 4] = ["a", "b", "c", "d"];

fn function() -> impl Strategy<Value = (usize, BTreeSet<u64>)> {
    (1usize..=4).prop_flat_map(|n| (Just(n), btree_set(0..(1u64 << n), 0..=(1usize << n))))
}

fn simplifier(n: usize, minterms: &BTreeSet<u64>) -> Simplifier {
    let minterms: Vec<u64> = minterms.iter().copied().collect();
    Simplifier::new(&minterms, &NAMES[..n]).unwrap()
}

/// Evaluate a plain-text expression such as `a′·b + c` at `assignment`
fn eval_text(expr: &str, names: &[&str], assignment: u64) -> bool {
    let n = names.len();
    let value = |name: &str| -> bool {
        let i = names.iter().position(|v| *v == name).unwrap();
        (assignment >> (n - 1 - i)) & 1 == 1
    };
    match expr {
        "0" => false,
        "1" => true,
        _ => expr.split(" + ").any(|product| {
            product.split('·').all(|literal| match literal.strip_suffix('′') {
                Some(name) => !value(name),
                None => value(literal),
            })
        }),
    }
}

/// Minimum cost over every subset of `primes` that covers `minterms`
fn brute_force_cost(primes: &[Term], minterms: &BTreeSet<u64>) -> usize {
    assert!(primes.len() <= 16);
    let mut best = usize::MAX;
    for mask in 0u32..(1 << primes.len()) {
        let chosen: Vec<&Term> = (0..primes.len())
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| &primes[i])
            .collect();
        let covers_all = minterms
            .iter()
            .all(|&m| chosen.iter().any(|t| t.covers_minterm(m)));
        if covers_all {
            best = best.min(chosen.iter().map(|t| t.literal_count()).sum());
        }
    }
    best
}

fn covers_exactly(cover: &Cover, minterms: &BTreeSet<u64>) -> bool {
    &cover.covered() == minterms
}

proptest! {
    #[test]
    fn prop_covers_are_sound(f in function()) {
        let (n, minterms) = f;
        let s = simplifier(n, &minterms);
        for cover in s.all_minimal_covers().unwrap() {
            prop_assert!(covers_exactly(cover, &minterms));
            for assignment in 0..(1u64 << n) {
                prop_assert_eq!(cover.evaluate(assignment), minterms.contains(&assignment));
            }
        }
    }

    #[test]
    fn prop_rendered_expression_matches_truth_table(f in function()) {
        let (n, minterms) = f;
        let s = simplifier(n, &minterms);
        for cover in s.all_minimal_covers().unwrap() {
            let expr = cover.to_expression(&NAMES[..n]);
            for assignment in 0..(1u64 << n) {
                prop_assert_eq!(
                    eval_text(&expr, &NAMES[..n], assignment),
                    minterms.contains(&assignment),
                    "expr {} at {}", expr, assignment
                );
            }
        }
    }

    #[test]
    fn prop_no_redundant_implicant(f in function()) {
        let (n, minterms) = f;
        let s = simplifier(n, &minterms);
        for cover in s.all_minimal_covers().unwrap() {
            for skip in 0..cover.len() {
                let rest: Vec<Term> = cover
                    .implicants()
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip)
                    .map(|(_, t)| t.clone())
                    .collect();
                prop_assert!(!covers_exactly(&Cover::new(rest), &minterms));
            }
        }
    }

    #[test]
    fn prop_essentials_in_every_cover(f in function()) {
        let (n, minterms) = f;
        let s = simplifier(n, &minterms);
        let essentials = s.essentials().unwrap();
        for cover in s.all_minimal_covers().unwrap() {
            for e in essentials {
                prop_assert!(cover.contains(e));
            }
        }
    }

    #[test]
    fn prop_results_are_reproducible(f in function()) {
        let (n, minterms) = f;
        let first = simplifier(n, &minterms);
        let second = simplifier(n, &minterms);
        prop_assert_eq!(first.solve().unwrap(), second.solve().unwrap());
        prop_assert_eq!(first.solve().unwrap(), first.solve().unwrap());
        prop_assert_eq!(first.chart_data().unwrap(), second.chart_data().unwrap());
    }

    #[test]
    fn prop_cost_matches_brute_force(f in function()) {
        let (n, minterms) = f;
        let s = simplifier(n, &minterms);
        let solution = s.solve().unwrap();
        let oracle = brute_force_cost(solution.prime_implicants(), &minterms);
        prop_assert_eq!(solution.cost(), oracle);
        for cover in solution.minimal_covers() {
            prop_assert_eq!(cover.cost(), oracle);
        }
    }

    #[test]
    fn prop_all_covers_distinct(f in function()) {
        let (n, minterms) = f;
        let s = simplifier(n, &minterms);
        let covers = s.all_minimal_covers().unwrap();
        let sets: BTreeSet<Vec<String>> = covers
            .iter()
            .map(|c| {
                let mut p: Vec<String> = c.implicants().iter().map(|t| t.to_string()).collect();
                p.sort();
                p
            })
            .collect();
        prop_assert_eq!(sets.len(), covers.len());
    }
}

#[test]
fn test_every_three_variable_function_is_optimal() {
    for function in 0u32..256 {
        let minterms: BTreeSet<u64> = (0..8u64).filter(|m| function & (1 << m) != 0).collect();
        let s = simplifier(3, &minterms);
        let solution = s.solve().unwrap();
        let oracle = brute_force_cost(solution.prime_implicants(), &minterms);
        assert_eq!(solution.cost(), oracle, "function {:#010b}", function);
        assert!(covers_exactly(solution.minimal_cover(), &minterms));
    }
}
