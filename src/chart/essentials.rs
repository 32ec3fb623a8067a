//! Essential prime implicant extraction

use super::CoverageChart;
use log::debug;

/// Essential prime implicants of a chart and the rows they leave uncovered
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Essentials {
    /// Column indices of the essential implicants, in order of the first row
    /// that singled each one out
    pub columns: Vec<usize>,
    /// Row minterms not covered by any essential implicant, ascending
    pub residual: Vec<u64>,
}

/// Find every column that is the only cover of some row
///
/// A column is essential when at least one row has exactly one true cell and
/// that cell is in the column. The residual is the set of rows with no true
/// cell in any essential column.
pub fn select_essentials(chart: &CoverageChart) -> Essentials {
    let mut columns: Vec<usize> = Vec::new();
    for row in 0..chart.num_rows() {
        let mut covering = chart.covering(row);
        if let (Some(col), None) = (covering.next(), covering.next()) {
            if !columns.contains(&col) {
                columns.push(col);
            }
        }
    }

    let residual: Vec<u64> = chart
        .minterms()
        .iter()
        .enumerate()
        .filter(|(row, _)| !columns.iter().any(|&c| chart.is_covered(*row, c)))
        .map(|(_, &m)| m)
        .collect();

    debug!(
        "essentials: {} essential implicant(s), {} residual minterm(s)",
        columns.len(),
        residual.len()
    );
    Essentials { columns, residual }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::prime_implicants;

    fn chart_for(minterms: &[u64], n: usize) -> CoverageChart {
        let primes = prime_implicants(minterms, n);
        CoverageChart::build(minterms, &primes, n)
    }

    #[test]
    fn test_all_essential() {
        let chart = chart_for(&[0, 2, 4, 5, 6], 3);
        let ess = select_essentials(&chart);
        // --0 is singled out by row 0 before 10- is singled out by row 5
        assert_eq!(ess.columns, vec![1, 0]);
        assert!(ess.residual.is_empty());
    }

    #[test]
    fn test_cyclic_chart_has_no_essentials() {
        let chart = chart_for(&[0, 1, 2, 5, 6, 7], 3);
        let ess = select_essentials(&chart);
        assert!(ess.columns.is_empty());
        assert_eq!(ess.residual, vec![0, 1, 2, 5, 6, 7]);
    }

    #[test]
    fn test_partial_residual() {
        let chart = chart_for(&[0, 1, 5, 7, 8, 10, 14, 15], 4);
        let ess = select_essentials(&chart);
        for &m in &ess.residual {
            let row = chart.minterms().iter().position(|&x| x == m).unwrap();
            for &c in &ess.columns {
                assert!(!chart.is_covered(row, c));
            }
        }
        for &c in &ess.columns {
            let unique_row = (0..chart.num_rows()).any(|r| {
                let cols: Vec<usize> = chart.covering(r).collect();
                cols == vec![c]
            });
            assert!(unique_row);
        }
    }

    #[test]
    fn test_empty_chart() {
        let chart = CoverageChart::build(&[], &[], 3);
        assert_eq!(select_essentials(&chart), Essentials::default());
    }
}
