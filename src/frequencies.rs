//! Frequency normalization: raw tables to canonical contingency form.
//!
//! Cooccurrence data for a pair of items arrives in one of three
//! notations (see [`Notation`]); this module turns any of them into the
//! canonical four-cell representation and derives expected frequencies
//! under the independence null model.

use crate::data::{
    ContingencyTable, ExpectedTable, FrequencyContext, Notation, Overrides, Table,
};
use crate::error::{AmError, Result};

/// Compute the canonical contingency table for a raw frequency table.
///
/// The notation is resolved once via [`Notation::detect`]; contingency
/// input passes through unchanged (the operation is idempotent). Scalar
/// overrides substitute for the `f1`/`N` (signature) or `N1`/`N2` (corpus)
/// columns. Derivations:
///
/// - signature: `O11 = f`, `O12 = f1 - f`, `O21 = f2 - f`,
///   `O22 = N - f1 - f2 + f`
/// - corpus: `O11 = f1`, `O12 = N1 - f1`, `O21 = f2`, `O22 = N2 - f2`
pub fn observed_frequencies(table: &Table, overrides: &Overrides) -> Result<ContingencyTable> {
    let notation = Notation::detect(table, overrides)?;
    let row_ids = table.row_ids().to_vec();
    let n_rows = table.n_rows();

    match notation {
        Notation::Contingency => {
            let o11 = required_column(table, "O11")?.to_vec();
            // A redundant `f` column must agree with O11 on every row.
            if let Some(f) = table.column("f") {
                for (row, (&f_val, &o11_val)) in f.iter().zip(o11.iter()).enumerate() {
                    if f_val != o11_val {
                        return Err(AmError::ConflictingCounts {
                            row,
                            f: f_val,
                            o11: o11_val,
                        });
                    }
                }
            }
            ContingencyTable::new(
                row_ids,
                o11,
                required_column(table, "O12")?.to_vec(),
                required_column(table, "O21")?.to_vec(),
                required_column(table, "O22")?.to_vec(),
            )
        }
        Notation::Signature => {
            let f = required_column(table, "f")?;
            let f1 = column_or_scalar(table, "f1", overrides.f1, n_rows)?;
            let f2 = required_column(table, "f2")?;
            let n = column_or_scalar(table, "N", overrides.n, n_rows)?;

            let mut o12 = Vec::with_capacity(n_rows);
            let mut o21 = Vec::with_capacity(n_rows);
            let mut o22 = Vec::with_capacity(n_rows);
            for i in 0..n_rows {
                o12.push(f1[i] - f[i]);
                o21.push(f2[i] - f[i]);
                o22.push(n[i] - f1[i] - f2[i] + f[i]);
            }
            ContingencyTable::new(row_ids, f.to_vec(), o12, o21, o22)
        }
        Notation::CorpusFrequencies => {
            let f1 = required_column(table, "f1")?;
            let f2 = required_column(table, "f2")?;
            let n1 = column_or_scalar(table, "N1", overrides.n1, n_rows)?;
            let n2 = column_or_scalar(table, "N2", overrides.n2, n_rows)?;

            let mut o12 = Vec::with_capacity(n_rows);
            let mut o22 = Vec::with_capacity(n_rows);
            for i in 0..n_rows {
                o12.push(n1[i] - f1[i]);
                o22.push(n2[i] - f2[i]);
            }
            ContingencyTable::new(row_ids, f1.to_vec(), o12, f2.to_vec(), o22)
        }
    }
}

/// Compute expected frequencies under row/column independence.
///
/// `Eij = Ri * Cj / N`; rows with `N = 0` yield `NaN` cells.
pub fn expected_frequencies(table: &Table, overrides: &Overrides) -> Result<ExpectedTable> {
    let observed = observed_frequencies(table, overrides)?;
    Ok(expected_from_observed(&observed))
}

/// Compute the full frequency context: observed cells, marginals, expected.
///
/// This is the shared input of every association measure; `score` calls it
/// exactly once per table.
pub fn frequency_context(table: &Table, overrides: &Overrides) -> Result<FrequencyContext> {
    let observed = observed_frequencies(table, overrides)?;
    let expected = expected_from_observed(&observed);
    let marginals = observed.marginals();
    Ok(FrequencyContext {
        observed,
        marginals,
        expected,
    })
}

pub(crate) fn expected_from_observed(observed: &ContingencyTable) -> ExpectedTable {
    let m = observed.marginals();
    let n_rows = observed.len();
    let mut expected = ExpectedTable {
        e11: Vec::with_capacity(n_rows),
        e12: Vec::with_capacity(n_rows),
        e21: Vec::with_capacity(n_rows),
        e22: Vec::with_capacity(n_rows),
    };
    for i in 0..n_rows {
        if m.n[i] == 0.0 {
            expected.e11.push(f64::NAN);
            expected.e12.push(f64::NAN);
            expected.e21.push(f64::NAN);
            expected.e22.push(f64::NAN);
        } else {
            expected.e11.push(m.r1[i] * m.c1[i] / m.n[i]);
            expected.e12.push(m.r1[i] * m.c2[i] / m.n[i]);
            expected.e21.push(m.r2[i] * m.c1[i] / m.n[i]);
            expected.e22.push(m.r2[i] * m.c2[i] / m.n[i]);
        }
    }
    expected
}

fn required_column<'a>(table: &'a Table, name: &str) -> Result<&'a [f64]> {
    table
        .column(name)
        .ok_or_else(|| AmError::UnknownNotation {
            columns: table.column_names(),
        })
}

fn column_or_scalar(
    table: &Table,
    name: &str,
    scalar: Option<u64>,
    n_rows: usize,
) -> Result<Vec<f64>> {
    match (table.column(name), scalar) {
        (Some(column), None) => Ok(column.to_vec()),
        (None, Some(value)) => Ok(vec![value as f64; n_rows]),
        (Some(_), Some(_)) => Err(AmError::InvalidParameter(format!(
            "scalar override for '{name}' conflicts with an existing column of the same name"
        ))),
        (None, None) => Err(AmError::UnknownNotation {
            columns: table.column_names(),
        }),
    }
}
