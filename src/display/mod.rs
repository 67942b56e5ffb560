//! Display formatting for terminal output
//!
//! Renders expenses, listings, totals and the report as plain console text.

pub mod expense;

pub use expense::{
    format_category_listing, format_category_row, format_expense_list, format_expense_row,
    format_removal, format_report, format_total,
};
