//! Custom error types for the expense ledger
//!
//! Every failure a user can trigger from the console is a recoverable input
//! validation error. Only console I/O failures abort a session.

use thiserror::Error;

use crate::models::Money;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Amount text could not be parsed as a decimal number
    #[error("Enter a valid number (got '{0}')")]
    InvalidAmountFormat(String),

    /// Amount has digits past the cent
    #[error("Amount can have at most two decimal places (got '{0}')")]
    TooManyDecimals(String),

    /// Amount parsed but was zero or negative
    #[error("Amount has to be positive (got {0})")]
    NonPositiveAmount(Money),

    /// Adding the amount would push the ledger total out of range
    #[error("Amount too large (at most {0} can still be recorded)")]
    AmountTooLarge(Money),

    /// Category is not one of the fixed set
    #[error("Invalid category '{0}' (expected food, transport or entertainment)")]
    InvalidCategory(String),

    /// Entity not found errors
    #[error("No {entity_type} found with ID {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Top-level menu input outside 1-7
    #[error("Wrong input! Input should be from 1-7.")]
    InvalidMenuChoice(String),

    /// Console I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl LedgerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "expense",
            identifier: identifier.into(),
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
