//! Expense categories
//!
//! Categories are a closed set. User input is normalized and validated in
//! exactly one place, [`Category::parse`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of expense categories, in canonical report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
}

impl Category {
    /// All categories in their declared order
    pub const ALL: [Category; 3] = [Category::Food, Category::Transport, Category::Entertainment];

    /// Parse user input, ignoring surrounding whitespace and case
    pub fn parse(input: &str) -> Result<Self, CategoryParseError> {
        let normalized = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or(CategoryParseError::Unknown(normalized))
    }

    /// Lowercase key as typed by the user
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
        }
    }

    /// Uppercase label used in listings and reports
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Food => "FOOD",
            Self::Transport => "TRANSPORT",
            Self::Entertainment => "ENTERTAINMENT",
        }
    }

    /// Slash-separated list of keys for prompts ("food/transport/entertainment")
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error for input outside the category set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(input) => write!(f, "Unknown category: {}", input),
        }
    }
}

impl std::error::Error for CategoryParseError {}
