//! Main menu
//!
//! The seven top-level choices and their console rendering.

use std::fmt;

use crate::error::{LedgerError, LedgerResult};

/// Prompt shown after the menu
pub const MENU_PROMPT: &str = "Choose option (1-7): ";

/// A top-level menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewAll,
    ViewByCategory,
    CalculateTotal,
    RemoveExpense,
    GenerateReport,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddExpense,
        MenuChoice::ViewAll,
        MenuChoice::ViewByCategory,
        MenuChoice::CalculateTotal,
        MenuChoice::RemoveExpense,
        MenuChoice::GenerateReport,
        MenuChoice::Exit,
    ];

    /// Parse a menu line; only "1" through "7" are accepted
    pub fn parse(input: &str) -> LedgerResult<Self> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.key().to_string() == trimmed)
            .ok_or_else(|| LedgerError::InvalidMenuChoice(trimmed.to_string()))
    }

    /// Number the user types for this choice
    pub const fn key(&self) -> u8 {
        match self {
            Self::AddExpense => 1,
            Self::ViewAll => 2,
            Self::ViewByCategory => 3,
            Self::CalculateTotal => 4,
            Self::RemoveExpense => 5,
            Self::GenerateReport => 6,
            Self::Exit => 7,
        }
    }

    /// Menu label
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::ViewAll => "View All Expenses",
            Self::ViewByCategory => "View by Category",
            Self::CalculateTotal => "Calculate Total",
            Self::RemoveExpense => "Remove Expense",
            Self::GenerateReport => "Generate Report",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.key(), self.title())
    }
}

/// Render the menu block shown before every choice
pub fn render_menu() -> String {
    let mut output = String::from("\n=== EXPENSE TRACKER ===\n");
    for choice in MenuChoice::ALL {
        output.push_str(&format!("{}\n", choice));
    }
    output
}
