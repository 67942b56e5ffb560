//! In-memory expense repository
//!
//! Holds the ordered expense list and the id counter for one session.
//! Nothing is written to disk; the ledger is dropped with its owner.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Expense, ExpenseId, Money};

/// Ordered store of expenses plus the next id to issue
///
/// Insertion order is display order. Ids are never reused, even after the
/// expense that held one is removed. The running total never exceeds
/// [`Money::MAX`], so any sum over a subset of the ledger fits as well.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
    next_id: ExpenseId,
    total: Money,
}

impl Ledger {
    /// Create an empty ledger whose first id is 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new expense, assigning it the next id
    ///
    /// The amount is checked before the counter moves, so a rejected insert
    /// leaves the list, the counter and the total untouched.
    pub fn insert(
        &mut self,
        amount: Money,
        category: Category,
        description: &str,
        date: NaiveDate,
    ) -> LedgerResult<Expense> {
        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        let total = self
            .total
            .checked_add(amount)
            .ok_or_else(|| LedgerError::AmountTooLarge(self.headroom()))?;

        let expense = Expense::new(self.next_id, amount, category, description, date);
        self.next_id = expense.id.next();
        self.total = total;
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// All expenses in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses in one category, in insertion order
    pub fn by_category(&self, category: Category) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect()
    }

    /// Remove an expense, keeping the relative order of the rest
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        let expense = self.expenses.remove(index);
        self.total -= expense.amount;
        Some(expense)
    }

    /// Sum of every stored amount
    pub fn total(&self) -> Money {
        self.total
    }

    /// Largest amount the next insert may carry
    pub fn headroom(&self) -> Money {
        Money::MAX - self.total
    }

    /// Number of stored expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the ledger holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The id the next insert will receive
    pub fn next_id(&self) -> ExpenseId {
        self.next_id
    }
}
