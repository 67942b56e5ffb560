//! Expense model
//!
//! A single cash expense. Fields are write-once: there is no editing, only
//! creation through the ledger and removal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Sequential identifier, unique within the session
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Category the expense is filed under
    pub category: Category,

    /// Free-form description, trimmed
    #[serde(default)]
    pub description: String,

    /// Calendar date the expense was recorded
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        amount: Money,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        let description: String = description.into();
        Self {
            id,
            amount,
            category,
            description: description.trim().to_string(),
            date,
        }
    }
}
