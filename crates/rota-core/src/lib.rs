//! rota-core
//!
//! Pure domain types and the first-segment rule. No I/O — this is the
//! shared vocabulary of the rota workspace.

pub mod models;
pub mod text;
