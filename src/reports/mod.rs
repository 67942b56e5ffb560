//! Reports module
//!
//! Provides the per-category expense summary.

pub mod summary;

pub use summary::{CategorySummary, ExpenseReport};
