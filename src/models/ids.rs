//! Expense identifiers
//!
//! Ids are plain sequential integers handed out by the ledger, starting at 1.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an expense within one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The first id a fresh ledger issues
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Create an id from a raw number
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw number
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
