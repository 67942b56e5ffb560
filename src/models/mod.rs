//! Core data models for the expense ledger
//!
//! Money amounts, the closed category set, expense ids and the expense record
//! itself.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, CategoryParseError};
pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
