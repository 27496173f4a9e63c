//! Canonical contingency representation and derived frequency structures.

use crate::data::Table;
use crate::error::{AmError, Result};
use serde::{Deserialize, Serialize};

/// A batch of 2x2 contingency tables, one per row.
///
/// `O11` is the joint count, `O12`/`O21`/`O22` the complementary cells.
/// By construction `O11 + O12 + O21 + O22 = N` and the marginal identities
/// `R1 + R2 = C1 + C2 = N` hold for every row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContingencyTable {
    row_ids: Vec<String>,
    pub o11: Vec<f64>,
    pub o12: Vec<f64>,
    pub o21: Vec<f64>,
    pub o22: Vec<f64>,
}

/// Row and column marginals plus the grand total, one value per row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marginals {
    pub r1: Vec<f64>,
    pub r2: Vec<f64>,
    pub c1: Vec<f64>,
    pub c2: Vec<f64>,
    pub n: Vec<f64>,
}

/// Expected frequencies under row/column independence, one 2x2 per row.
///
/// Cells of rows with `N = 0` are `NaN` (0/0), never an error; downstream
/// measures propagate the undefined value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedTable {
    pub e11: Vec<f64>,
    pub e12: Vec<f64>,
    pub e21: Vec<f64>,
    pub e22: Vec<f64>,
}

/// Shared frequency context: observed cells, marginals and expected cells.
///
/// Computed once per scoring call and reused by every requested measure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyContext {
    pub observed: ContingencyTable,
    pub marginals: Marginals,
    pub expected: ExpectedTable,
}

impl ContingencyTable {
    /// Create a contingency table from its four cell columns.
    pub fn new(
        row_ids: Vec<String>,
        o11: Vec<f64>,
        o12: Vec<f64>,
        o21: Vec<f64>,
        o22: Vec<f64>,
    ) -> Result<Self> {
        let n_rows = row_ids.len();
        for column in [&o11, &o12, &o21, &o22] {
            if column.len() != n_rows {
                return Err(AmError::DimensionMismatch {
                    expected: n_rows,
                    actual: column.len(),
                });
            }
        }
        Ok(Self {
            row_ids,
            o11,
            o12,
            o21,
            o22,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.row_ids.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_ids.is_empty()
    }

    /// Row identifiers.
    pub fn row_ids(&self) -> &[String] {
        &self.row_ids
    }

    /// Derive row/column marginals and the grand total.
    pub fn marginals(&self) -> Marginals {
        let n_rows = self.len();
        let mut marginals = Marginals {
            r1: Vec::with_capacity(n_rows),
            r2: Vec::with_capacity(n_rows),
            c1: Vec::with_capacity(n_rows),
            c2: Vec::with_capacity(n_rows),
            n: Vec::with_capacity(n_rows),
        };
        for i in 0..n_rows {
            let r1 = self.o11[i] + self.o12[i];
            let r2 = self.o21[i] + self.o22[i];
            marginals.r1.push(r1);
            marginals.r2.push(r2);
            marginals.c1.push(self.o11[i] + self.o21[i]);
            marginals.c2.push(self.o12[i] + self.o22[i]);
            marginals.n.push(r1 + r2);
        }
        marginals
    }

    /// Materialize the canonical columns as a [`Table`].
    ///
    /// With `marginals` set, the output additionally carries
    /// `R1`, `R2`, `C1`, `C2` and `N`.
    pub fn to_table(&self, marginals: bool) -> Table {
        let mut table = Table::new(self.row_ids.clone());
        // Lengths are validated at construction, set_column cannot fail.
        let _ = table.set_column("O11", self.o11.clone());
        let _ = table.set_column("O12", self.o12.clone());
        let _ = table.set_column("O21", self.o21.clone());
        let _ = table.set_column("O22", self.o22.clone());
        if marginals {
            let m = self.marginals();
            let _ = table.set_column("R1", m.r1);
            let _ = table.set_column("R2", m.r2);
            let _ = table.set_column("C1", m.c1);
            let _ = table.set_column("C2", m.c2);
            let _ = table.set_column("N", m.n);
        }
        table
    }
}

impl FrequencyContext {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// Check if the context has no rows.
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Row identifiers.
    pub fn row_ids(&self) -> &[String] {
        self.observed.row_ids()
    }

    /// Materialize observed cells, marginals and expected cells as a table.
    pub fn to_table(&self) -> Table {
        let mut table = self.observed.to_table(true);
        let _ = table.set_column("E11", self.expected.e11.clone());
        let _ = table.set_column("E12", self.expected.e12.clone());
        let _ = table.set_column("E21", self.expected.e21.clone());
        let _ = table.set_column("E22", self.expected.e22.clone());
        table
    }
}
