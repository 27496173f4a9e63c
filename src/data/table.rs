//! Named-column table of per-row numeric data.

use crate::error::{AmError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// A table of `f64` columns sharing one row index.
///
/// Rows represent independent observations (e.g. one collocate candidate
/// each), columns are named frequency or score variables. Column order is
/// preserved for output; lookup is by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Row identifiers (e.g. lexical items), shared by all columns.
    row_ids: Vec<String>,
    /// Ordered named columns, each with one value per row.
    columns: Vec<(String, Vec<f64>)>,
}

impl Table {
    /// Create an empty table over the given row index.
    pub fn new(row_ids: Vec<String>) -> Self {
        Self {
            row_ids,
            columns: Vec::new(),
        }
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.row_ids.len()
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_ids.is_empty()
    }

    /// Row identifiers.
    pub fn row_ids(&self) -> &[String] {
        &self.row_ids
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Check whether a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Insert a column, replacing any existing column of the same name.
    ///
    /// The column length must match the row index.
    pub fn set_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        if values.len() != self.row_ids.len() {
            return Err(AmError::DimensionMismatch {
                expected: self.row_ids.len(),
                actual: values.len(),
            });
        }
        let name = name.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = values,
            None => self.columns.push((name, values)),
        }
        Ok(())
    }

    /// Build a table from row ids and named columns.
    pub fn from_columns(
        row_ids: Vec<String>,
        columns: Vec<(String, Vec<f64>)>,
    ) -> Result<Self> {
        let mut table = Self::new(row_ids);
        for (name, values) in columns {
            table.set_column(name, values)?;
        }
        Ok(table)
    }

    /// Load a table from a CSV file.
    ///
    /// Expected format:
    /// - First row: header (first column is the row-id header)
    /// - Subsequent rows: row id followed by numeric values
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));

        let headers = reader.headers()?.clone();
        if headers.len() < 2 {
            return Err(AmError::EmptyData(
                "CSV must have a row-id column and at least one value column".to_string(),
            ));
        }
        let names: Vec<String> = headers.iter().skip(1).map(|h| h.to_string()).collect();

        let mut row_ids: Vec<String> = Vec::new();
        let mut values: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;
            let mut fields = record.iter();
            let id = fields.next().unwrap_or("").to_string();
            row_ids.push(id);
            for (col_idx, field) in fields.enumerate() {
                if col_idx >= names.len() {
                    break;
                }
                let value: f64 = field.trim().parse().map_err(|_| AmError::InvalidValue {
                    value: field.to_string(),
                    row: row_idx,
                    column: names[col_idx].clone(),
                })?;
                values[col_idx].push(value);
            }
        }
        if row_ids.is_empty() {
            return Err(AmError::EmptyData("No rows in CSV".to_string()));
        }

        Self::from_columns(row_ids, names.into_iter().zip(values).collect())
    }

    /// Write the table to a CSV file.
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(BufWriter::new(file));

        let mut header = vec!["id".to_string()];
        header.extend(self.column_names());
        writer.write_record(&header)?;

        for (i, id) in self.row_ids.iter().enumerate() {
            let mut record = vec![id.clone()];
            for (_, values) in &self.columns {
                record.push(values[i].to_string());
            }
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Serialize the table as a JSON array of row records.
    pub fn to_json_string(&self) -> Result<String> {
        let records: Vec<serde_json::Value> = self
            .row_ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let mut record = serde_json::Map::new();
                record.insert("id".to_string(), serde_json::Value::from(id.clone()));
                for (name, values) in &self.columns {
                    record.insert(name.clone(), serde_json::Value::from(values[i]));
                }
                serde_json::Value::Object(record)
            })
            .collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }
}
