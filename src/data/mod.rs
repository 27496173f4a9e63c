//! Core data structures for frequency tables and contingency data.

pub mod contingency;
pub mod notation;
pub mod table;

pub use contingency::{ContingencyTable, ExpectedTable, FrequencyContext, Marginals};
pub use notation::{Notation, Overrides};
pub use table::Table;
