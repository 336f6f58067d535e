//! rota-export
//!
//! Paginated fixed-layout PDF generation for exam schedules.

pub mod encoding;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod page;
pub mod pdf;
pub mod styles;
