//! Weighted periodic-series summation.
//!
//! Every empirical fit in the engine (solar longitude, the lunar longitude,
//! latitude and distance series, the new-moon corrections) is a sum of
//! `coefficient · sin/cos(linear combination of phase angles)` over a fixed
//! table. The tables are stored one row per term, so their columns cannot
//! drift out of alignment; [`sum_series`] walks such a table.
//!
//! [`sum_parallel`] covers the column-oriented layout: separate slices that
//! must have identical length. A length mismatch is a programming error and
//! panics.

/// Evaluate a polynomial `c[0] + c[1]·x + c[2]·x² + …` by Horner's rule.
pub fn poly(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Sum `term(row)` over every row of a series table.
pub fn sum_series<R>(rows: &[R], term: impl Fn(&R) -> f64) -> f64 {
    rows.iter().map(term).sum()
}

/// Sum `term([col_0[i], col_1[i], …])` over aligned columns.
///
/// # Panics
/// Panics if the columns do not all have the same length.
pub fn sum_parallel<const K: usize>(columns: [&[f64]; K], term: impl Fn([f64; K]) -> f64) -> f64 {
    let n = columns.first().map_or(0, |c| c.len());
    assert!(
        columns.iter().all(|c| c.len() == n),
        "series columns must have equal length"
    );
    (0..n).map(|i| term(columns.map(|c| c[i]))).sum()
}
