//! rota-sheet
//!
//! Schedule sheet ingestion. Reads the exam table from delimited files,
//! addressing columns strictly by position.

pub mod error;
pub mod load;
