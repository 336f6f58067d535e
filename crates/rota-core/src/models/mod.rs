pub mod exam;
pub mod schedule;
