//! Expense display formatting
//!
//! Every expense is shown as one `field | field | field` line.

use crate::config::Settings;
use crate::models::{Expense, Money};
use crate::reports::ExpenseReport;
use crate::services::CategoryListing;

/// Format a single expense with all fields
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "ID: {} | {} | {} | {} | {}",
        expense.id,
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.category.label(),
        expense.description,
        expense.date.format(&settings.date_format)
    )
}

/// Format an expense inside a category listing, where the header names the category
pub fn format_category_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "ID: {} | {} | {} | {}",
        expense.id,
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.description,
        expense.date.format(&settings.date_format)
    )
}

/// Format the full ledger listing
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet\n".to_string();
    }

    let mut output = String::from("All Expenses:\n");
    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }
    output
}

/// Format the expenses of one category with their total
pub fn format_category_listing(listing: &CategoryListing, settings: &Settings) -> String {
    if listing.is_empty() {
        return "No expenses in this category\n".to_string();
    }

    let mut output = format!("{} Expenses:\n", listing.category.label());
    for expense in &listing.expenses {
        output.push_str(&format_category_row(expense, settings));
        output.push('\n');
    }
    output.push_str(&format!(
        "Category Total: {}\n",
        listing.total.format_with_symbol(&settings.currency_symbol)
    ));
    output
}

/// Format the ledger total, or a notice when there is nothing to add up
pub fn format_total(total: Money, count: usize, settings: &Settings) -> String {
    if count == 0 {
        return "No expenses yet.\n".to_string();
    }
    format!(
        "TOTAL EXPENSES: {}\n",
        total.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format the confirmation shown after a removal
pub fn format_removal(expense: &Expense, remaining: usize, settings: &Settings) -> String {
    format!(
        "Removed expense ID {}: {} | {} | {}\nTotal expenses remaining: {}\n",
        expense.id,
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.category.label(),
        expense.description,
        remaining
    )
}

/// Format the summary report, or a notice when the ledger is empty
pub fn format_report(report: Option<&ExpenseReport>, settings: &Settings) -> String {
    match report {
        Some(report) => report.format_terminal(settings),
        None => "No expenses to generate report.\n".to_string(),
    }
}
