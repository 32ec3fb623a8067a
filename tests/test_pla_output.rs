//! PLA files written from minimal covers

use logicloom::demos::DEMOS;
use logicloom::render::pla;
use logicloom::Simplifier;
use std::collections::BTreeSet;
use std::fs;
use tempfile::NamedTempFile;

/// Minterms named by the cube lines of a single-output PLA
fn minterms_of(text: &str, num_vars: usize) -> BTreeSet<u64> {
    let mut out = BTreeSet::new();
    for line in text.lines().filter(|l| !l.starts_with('.')) {
        let (cube, output) = line.split_once(' ').expect("cube line");
        assert_eq!(output, "1");
        for m in 0..(1u64 << num_vars) {
            let hit = cube.chars().enumerate().all(|(i, c)| {
                let bit = (m >> (num_vars - 1 - i)) & 1 == 1;
                match c {
                    '-' => true,
                    '1' => bit,
                    '0' => !bit,
                    other => panic!("unexpected cube character {:?}", other),
                }
            });
            if hit {
                out.insert(m);
            }
        }
    }
    out
}

#[test]
fn test_write_pla_file() {
    let s = Simplifier::new(&[1, 2], &["a", "b"]).unwrap();
    let temp = NamedTempFile::new().expect("Failed to create temp file");

    pla::to_pla_file(s.simplify().unwrap(), s.variables(), temp.path())
        .expect("Failed to write PLA");

    let text = fs::read_to_string(temp.path()).expect("Failed to read PLA");
    assert!(text.starts_with(".i 2\n.o 1\n.ilb a b\n.ob F\n.p 2\n"));
    assert!(text.contains("01 1\n"));
    assert!(text.contains("10 1\n"));
    assert!(text.ends_with(".e\n"));
}

#[test]
fn test_demo_files_reproduce_function() {
    for demo in DEMOS {
        let s = Simplifier::from_strings(demo.variables, demo.minterms).unwrap();
        let temp = NamedTempFile::new().expect("Failed to create temp file");
        pla::to_pla_file(s.simplify().unwrap(), s.variables(), temp.path()).unwrap();

        let text = fs::read_to_string(temp.path()).unwrap();
        let expected: BTreeSet<u64> = s.problem().minterms().iter().copied().collect();
        assert_eq!(minterms_of(&text, 4), expected, "demo {}", demo.minterms);
    }
}

#[test]
fn test_file_matches_string_rendering() {
    let s = Simplifier::new(&[0, 2, 4, 5, 6], &["x", "y", "z"]).unwrap();
    let temp = NamedTempFile::new().unwrap();
    pla::to_pla_file(s.simplify().unwrap(), s.variables(), temp.path()).unwrap();
    assert_eq!(
        fs::read_to_string(temp.path()).unwrap(),
        pla::to_pla_string(s.simplify().unwrap(), s.variables()).unwrap()
    );
}

#[test]
fn test_unwritable_path_is_an_error() {
    let s = Simplifier::new(&[1], &["a"]).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_such_dir").join("out.pla");
    assert!(pla::to_pla_file(s.simplify().unwrap(), s.variables(), missing).is_err());
}
