//! Input notation detection for frequency tables.

use crate::data::Table;
use crate::error::{AmError, Result};
use serde::{Deserialize, Serialize};

/// The three recognized input encodings of cooccurrence data.
///
/// Resolved once at ingestion and carried through the pipeline; downstream
/// code never re-inspects column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notation {
    /// Already-computed cells `O11`, `O12`, `O21`, `O22`.
    Contingency,
    /// Frequency signature: `f` (joint), `f1` (row total), `f2` (column
    /// total), `N` (grand total).
    Signature,
    /// Keyword form: `f1`/`f2` counts in two corpora of sizes `N1`/`N2`.
    CorpusFrequencies,
}

/// Scalar overrides applied uniformly to every row in place of a column.
///
/// `f1`/`n` belong to the frequency-signature notation, `n1`/`n2` to the
/// corpus-frequency notation; mixing the two groups is a usage error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Overrides {
    /// Row total `f1` (signature notation).
    pub f1: Option<u64>,
    /// Grand total `N` (signature notation).
    pub n: Option<u64>,
    /// Size of corpus 1 (corpus notation).
    pub n1: Option<u64>,
    /// Size of corpus 2 (corpus notation).
    pub n2: Option<u64>,
}

impl Overrides {
    pub(crate) fn has_signature(&self) -> bool {
        self.f1.is_some() || self.n.is_some()
    }

    pub(crate) fn has_corpus(&self) -> bool {
        self.n1.is_some() || self.n2.is_some()
    }
}

impl Notation {
    /// Resolve the notation of a table, honoring scalar overrides.
    ///
    /// Recognition order: contingency (idempotent fast path), then
    /// frequency signature, then corpus frequencies. A column set matching
    /// none of the three raises [`AmError::UnknownNotation`]; overrides
    /// belonging to a different notation than the columns raise
    /// [`AmError::InvalidParameter`].
    pub fn detect(table: &Table, overrides: &Overrides) -> Result<Self> {
        if overrides.has_signature() && overrides.has_corpus() {
            return Err(AmError::InvalidParameter(
                "scalar overrides f1/N (signature notation) cannot be combined \
                 with N1/N2 (corpus notation)"
                    .to_string(),
            ));
        }

        if ["O11", "O12", "O21", "O22"]
            .iter()
            .all(|c| table.has_column(c))
        {
            return Ok(Notation::Contingency);
        }

        if table.has_column("f")
            && (table.has_column("f1") || overrides.f1.is_some())
            && table.has_column("f2")
            && (table.has_column("N") || overrides.n.is_some())
        {
            if overrides.has_corpus() {
                return Err(AmError::InvalidParameter(
                    "scalar overrides N1/N2 apply to corpus-frequency notation, \
                     but the columns are in frequency-signature notation"
                        .to_string(),
                ));
            }
            return Ok(Notation::Signature);
        }

        if table.has_column("f1")
            && table.has_column("f2")
            && (table.has_column("N1") || overrides.n1.is_some())
            && (table.has_column("N2") || overrides.n2.is_some())
        {
            if overrides.has_signature() {
                return Err(AmError::InvalidParameter(
                    "scalar overrides f1/N apply to frequency-signature notation, \
                     but the columns are in corpus-frequency notation"
                        .to_string(),
                ));
            }
            return Ok(Notation::CorpusFrequencies);
        }

        Err(AmError::UnknownNotation {
            columns: table.column_names(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(columns: &[&str]) -> Table {
        Table::from_columns(
            vec!["a".into()],
            columns.iter().map(|c| (c.to_string(), vec![1.0])).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_detect_contingency() {
        let table = table_with(&["O11", "O12", "O21", "O22"]);
        let notation = Notation::detect(&table, &Overrides::default()).unwrap();
        assert_eq!(notation, Notation::Contingency);
    }

    #[test]
    fn test_detect_signature() {
        let table = table_with(&["f", "f1", "f2", "N"]);
        let notation = Notation::detect(&table, &Overrides::default()).unwrap();
        assert_eq!(notation, Notation::Signature);
    }

    #[test]
    fn test_detect_signature_with_overrides() {
        let table = table_with(&["f", "f2"]);
        let overrides = Overrides {
            f1: Some(10),
            n: Some(100),
            ..Default::default()
        };
        let notation = Notation::detect(&table, &overrides).unwrap();
        assert_eq!(notation, Notation::Signature);
    }

    #[test]
    fn test_detect_corpus() {
        let table = table_with(&["f1", "f2", "N1", "N2"]);
        let notation = Notation::detect(&table, &Overrides::default()).unwrap();
        assert_eq!(notation, Notation::CorpusFrequencies);
    }

    #[test]
    fn test_detect_corpus_with_overrides() {
        let table = table_with(&["f1", "f2"]);
        let overrides = Overrides {
            n1: Some(1000),
            n2: Some(2000),
            ..Default::default()
        };
        let notation = Notation::detect(&table, &overrides).unwrap();
        assert_eq!(notation, Notation::CorpusFrequencies);
    }

    #[test]
    fn test_contingency_takes_precedence() {
        // Contingency columns win even when signature columns are present too.
        let table = table_with(&["O11", "O12", "O21", "O22", "f", "f1", "f2", "N"]);
        let notation = Notation::detect(&table, &Overrides::default()).unwrap();
        assert_eq!(notation, Notation::Contingency);
    }

    #[test]
    fn test_unknown_notation() {
        let table = table_with(&["f1", "f2", "N"]);
        let result = Notation::detect(&table, &Overrides::default());
        assert!(matches!(result, Err(AmError::UnknownNotation { .. })));
    }

    #[test]
    fn test_mixed_overrides_rejected() {
        let table = table_with(&["f", "f2"]);
        let overrides = Overrides {
            f1: Some(10),
            n1: Some(1000),
            ..Default::default()
        };
        let result = Notation::detect(&table, &overrides);
        assert!(matches!(result, Err(AmError::InvalidParameter(_))));
    }

    #[test]
    fn test_signature_overrides_with_corpus_columns_rejected() {
        let table = table_with(&["f1", "f2", "N1", "N2"]);
        let overrides = Overrides {
            n: Some(100),
            ..Default::default()
        };
        let result = Notation::detect(&table, &overrides);
        assert!(matches!(result, Err(AmError::InvalidParameter(_))));
    }
}
