//! Corpus-linguistic association measures.
//!
//! This library computes statistical association scores for cooccurrence
//! frequency data organized as 2x2 contingency tables, batch-processing
//! many tables at once (one per row of an input table).
//!
//! # Overview
//!
//! The library is organized into composable modules:
//!
//! - **data**: Core data structures (Table, Notation, ContingencyTable)
//! - **frequencies**: Normalization to canonical contingency form and
//!   expected frequencies under independence
//! - **measures**: The closed catalog of association measures
//! - **correct**: Multiple-comparison correction (Bonferroni, Sidak)
//! - **score**: The top-level scoring entry point
//! - **binomial**: Binomial-coefficient leaf helper
//! - **comparisons**: Rank-list comparison utilities (RBO, Gwet's AC1)
//! - **grids**: Logarithmic frequency grids and score topographies
//!
//! # Example
//!
//! ```no_run
//! use association_measures::prelude::*;
//!
//! // Load cooccurrence data in frequency-signature notation (f, f1, f2, N)
//! let table = Table::from_csv("counts.csv").unwrap();
//!
//! // Score with the default registry
//! let result = score(&table, &ScoreParams::default()).unwrap();
//! println!("{}", result.to_json_string().unwrap());
//! ```
//!
//! Undefined arithmetic (all-zero rows, division by zero) yields `NaN` for
//! the affected row and measure only; format and parameter errors are
//! raised before any row is processed.

pub mod binomial;
pub mod comparisons;
pub mod correct;
pub mod data;
pub mod error;
pub mod frequencies;
pub mod grids;
pub mod measures;
pub mod score;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::binomial::choose;
    pub use crate::comparisons::{gwets_ac1, rbo};
    pub use crate::correct::{adjusted_alpha, Correction};
    pub use crate::data::{
        ContingencyTable, ExpectedTable, FrequencyContext, Marginals, Notation, Overrides, Table,
    };
    pub use crate::error::{AmError, Result};
    pub use crate::frequencies::{expected_frequencies, frequency_context, observed_frequencies};
    pub use crate::grids::{log_grid, log_seq, topography};
    pub use crate::measures::{
        binomial_likelihood, conservative_log_ratio, dice, hypergeometric_likelihood, liddell,
        list_measures, local_mutual_information, log_likelihood, log_ratio, min_sensitivity,
        mutual_information, simple_ll, t_score, z_score, Boundary, ClrParams, MeasureKind,
    };
    pub use crate::score::{score, ScoreParams};
}
