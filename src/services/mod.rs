//! Business logic layer for the expense ledger
//!
//! Services validate console input and apply it to the in-memory ledger.

pub mod expense;

pub use expense::{CategoryListing, CreateExpenseInput, ExpenseService};
