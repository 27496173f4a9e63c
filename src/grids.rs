//! Logarithmically-scaled frequency grids and score topographies.
//!
//! A topography evaluates every measure over a grid of `(f1, f2)`
//! combinations in corpus-frequency notation, e.g. to visualize how a
//! measure behaves across the frequency spectrum.

use crate::data::{Overrides, Table};
use crate::error::{AmError, Result};
use crate::measures::Boundary;
use crate::score::{score, ScoreParams};

/// An integer sequence that is exact up to `exact` and logarithmically
/// scaled from there up to `to`, with `length` values in total.
pub fn log_seq(to: f64, length: usize, exact: usize) -> Result<Vec<u64>> {
    if length <= exact {
        return Err(AmError::InvalidParameter(format!(
            "sequence length {length} must exceed the exact range {exact}"
        )));
    }
    let mut seq: Vec<u64> = (0..=exact as u64).collect();

    let tail = length - exact - 1;
    let start = (exact as f64).ln();
    let stop = to.ln();
    for i in 0..tail {
        let fraction = if tail > 1 {
            i as f64 / (tail - 1) as f64
        } else {
            1.0
        };
        let value = (start + fraction * (stop - start)).exp();
        seq.push(value as u64);
    }
    Ok(seq)
}

/// A deduplicated `(f1, f2)` grid in corpus-frequency notation.
pub fn log_grid(n1: f64, n2: f64, length: usize, exact: usize) -> Result<Table> {
    let f1_seq = log_seq(n1, length, exact)?;
    let f2_seq = log_seq(n2, length, exact)?;

    let mut seen = std::collections::HashSet::new();
    let mut f1 = Vec::new();
    let mut f2 = Vec::new();
    for &a in &f1_seq {
        for &b in &f2_seq {
            if seen.insert((a, b)) {
                f1.push(a as f64);
                f2.push(b as f64);
            }
        }
    }

    let row_ids = (0..f1.len()).map(|i| i.to_string()).collect();
    Table::from_columns(row_ids, vec![("f1".into(), f1), ("f2".into(), f2)])
}

/// Score a logarithmically-scaled grid with the default registry.
///
/// The result carries the grid support (`f1`, `f2`), one column per
/// default measure, and `clr_normal` as the normal-approximation
/// alternative to the exact conservative log-ratio.
pub fn topography(n1: f64, n2: f64, length: usize, exact: usize) -> Result<Table> {
    let grid = log_grid(n1, n2, length, exact)?;
    let params = ScoreParams {
        overrides: Overrides {
            n1: Some(n1 as u64),
            n2: Some(n2 as u64),
            ..Default::default()
        },
        ..Default::default()
    };

    let mut result = Table::new(grid.row_ids().to_vec());
    result.set_column("f1", grid.column("f1").unwrap_or(&[]).to_vec())?;
    result.set_column("f2", grid.column("f2").unwrap_or(&[]).to_vec())?;

    let scores = score(&grid, &params)?;
    for name in scores.column_names() {
        result.set_column(name.clone(), scores.column(&name).unwrap_or(&[]).to_vec())?;
    }

    let normal = score(
        &grid,
        &ScoreParams {
            boundary: Boundary::Normal,
            measures: Some(vec!["conservative_log_ratio".into()]),
            ..params
        },
    )?;
    result.set_column(
        "clr_normal",
        normal
            .column("conservative_log_ratio")
            .unwrap_or(&[])
            .to_vec(),
    )?;
    Ok(result)
}
