//! Expense Summary Report
//!
//! Breaks the current ledger down by category, with a grand total and the
//! average expense. The report is a snapshot labelled with the month it was
//! generated in, not a history of past months.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::config::Settings;
use crate::models::{Category, Expense, Money};

/// Totals for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    /// Category
    pub category: Category,
    /// Sum of amounts
    pub total: Money,
    /// Number of expenses
    pub count: usize,
}

/// Expense Summary Report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseReport {
    /// Date the report was generated
    pub generated_on: NaiveDate,
    /// Categories with at least one expense, in canonical order
    pub categories: Vec<CategorySummary>,
    /// Sum of all amounts
    pub grand_total: Money,
    /// Number of expenses
    pub total_count: usize,
    /// Grand total divided by count
    pub average: Money,
}

impl ExpenseReport {
    /// Generate a report over the given expenses
    ///
    /// Returns `None` when there is nothing to summarize. The expenses are
    /// expected to come from one [`Ledger`](crate::storage::Ledger), whose
    /// total is bounded, so the per-category sums cannot overflow.
    pub fn generate(expenses: &[Expense], generated_on: NaiveDate) -> Option<Self> {
        let mut by_category: BTreeMap<Category, (Money, usize)> = BTreeMap::new();
        for expense in expenses {
            let entry = by_category
                .entry(expense.category)
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let categories: Vec<CategorySummary> = Category::ALL
            .into_iter()
            .filter_map(|category| {
                by_category
                    .get(&category)
                    .map(|&(total, count)| CategorySummary {
                        category,
                        total,
                        count,
                    })
            })
            .collect();

        let grand_total: Money = categories.iter().map(|c| c.total).sum();
        let total_count: usize = categories.iter().map(|c| c.count).sum();
        let average = grand_total.average(total_count)?;

        Some(Self {
            generated_on,
            categories,
            grand_total,
            total_count,
            average,
        })
    }

    /// Month label for the header, e.g. "OCTOBER 2026"
    pub fn period_label(&self, settings: &Settings) -> String {
        self.generated_on
            .format(&settings.report_month_format)
            .to_string()
            .to_uppercase()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = settings.currency_symbol.as_str();
        let mut output = String::new();

        output.push_str(&format!("EXPENSE REPORT - {}\n", self.period_label(settings)));

        for summary in &self.categories {
            output.push_str(&format!(
                "{}: {} ({} {})\n",
                summary.category.label(),
                summary.total.format_with_symbol(symbol),
                summary.count,
                if summary.count == 1 { "expense" } else { "expenses" }
            ));
        }

        output.push_str(&format!(
            "TOTAL: {} ({} expenses)\n",
            self.grand_total.format_with_symbol(symbol),
            self.total_count
        ));
        output.push_str(&format!(
            "AVERAGE: {} per expense\n",
            self.average.format_with_symbol(symbol)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn expense(id: u64, cents: i64, category: Category) -> Expense {
        Expense::new(ExpenseId::new(id), Money::from_cents(cents), category, "", date())
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(1, 2000, Category::Transport),
            expense(2, 1000, Category::Food),
            expense(3, 550, Category::Food),
        ]
    }

    #[test]
    fn test_empty_ledger_has_no_report() {
        assert!(ExpenseReport::generate(&[], date()).is_none());
    }

    #[test]
    fn test_groups_in_canonical_order() {
        let report = ExpenseReport::generate(&sample(), date()).unwrap();

        let order: Vec<Category> = report.categories.iter().map(|c| c.category).collect();
        assert_eq!(order, vec![Category::Food, Category::Transport]);

        let food = &report.categories[0];
        assert_eq!(food.count, 2);
        assert_eq!(food.total, Money::from_cents(1550));
    }

    #[test]
    fn test_partition_sums_to_totals() {
        let report = ExpenseReport::generate(&sample(), date()).unwrap();

        let counts: usize = report.categories.iter().map(|c| c.count).sum();
        let totals: Money = report.categories.iter().map(|c| c.total).sum();
        assert_eq!(counts, report.total_count);
        assert_eq!(totals, report.grand_total);
        assert_eq!(report.grand_total, Money::from_cents(3550));
        assert_eq!(report.average, Money::from_cents(1183));
    }

    #[test]
    fn test_format_terminal() {
        let report = ExpenseReport::generate(&sample(), date()).unwrap();
        let text = report.format_terminal(&Settings::default());

        assert_eq!(
            text,
            "EXPENSE REPORT - OCTOBER 2026\n\
             FOOD: $15.50 (2 expenses)\n\
             TRANSPORT: $20.00 (1 expense)\n\
             TOTAL: $35.50 (3 expenses)\n\
             AVERAGE: $11.83 per expense\n"
        );
    }

    #[test]
    fn test_totals_at_the_limit() {
        let half = Money::from_cents(i64::MAX / 2);
        let expenses = vec![
            expense(1, half.cents(), Category::Food),
            expense(2, half.cents(), Category::Transport),
        ];
        let report = ExpenseReport::generate(&expenses, date()).unwrap();
        assert_eq!(report.grand_total, Money::from_cents(i64::MAX - 1));
        assert_eq!(report.average, half);
    }

    #[test]
    fn test_format_uses_currency_symbol() {
        let report =
            ExpenseReport::generate(&[expense(1, 999, Category::Entertainment)], date()).unwrap();
        let text = report.format_terminal(&Settings::default().with_currency_symbol("€"));
        assert!(text.contains("ENTERTAINMENT: €9.99 (1 expense)"));
        assert!(text.contains("AVERAGE: €9.99 per expense"));
    }
}
