//! Expense service
//!
//! Business logic for the ledger: turns raw console input into validated
//! values, and performs add, list, filter, total and remove. Every input is
//! validated before the ledger is touched.
//!
//! Adding an expense is a two-stage operation so a console can re-ask for a
//! single field: each field goes through its parser (`parse_amount_within`,
//! `parse_category`), then the validated values go to [`ExpenseService::create`].

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Expense, ExpenseId, Money, MoneyParseError};
use crate::storage::Ledger;

/// Service for expense management
pub struct ExpenseService<'a> {
    ledger: &'a mut Ledger,
}

/// Validated values for a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

/// Expenses in one category with their combined amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub category: Category,
    pub expenses: Vec<Expense>,
    pub total: Money,
}

impl CategoryListing {
    /// Whether no expense matched the category
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service over a ledger
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Parse an amount typed by the user; it must be a number above zero
    pub fn parse_amount(input: &str) -> LedgerResult<Money> {
        let amount = Money::parse(input).map_err(|e| match e {
            MoneyParseError::TooManyDecimals(_) => {
                LedgerError::TooManyDecimals(input.trim().to_string())
            }
            MoneyParseError::InvalidFormat(_) => {
                LedgerError::InvalidAmountFormat(input.trim().to_string())
            }
        })?;

        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount(amount));
        }

        Ok(amount)
    }

    /// Parse an amount that must also fit in the ledger's remaining headroom
    pub fn parse_amount_within(input: &str, headroom: Money) -> LedgerResult<Money> {
        let amount = Self::parse_amount(input)?;
        if amount > headroom {
            return Err(LedgerError::AmountTooLarge(headroom));
        }
        Ok(amount)
    }

    /// Parse a category typed by the user
    pub fn parse_category(input: &str) -> LedgerResult<Category> {
        Category::parse(input).map_err(|_| LedgerError::InvalidCategory(input.trim().to_string()))
    }

    /// Parse an expense id typed by the user
    ///
    /// Text that is not an id cannot match any expense, so it is reported as
    /// not found rather than as a format error.
    pub fn parse_id(input: &str) -> LedgerResult<ExpenseId> {
        input
            .parse::<ExpenseId>()
            .map_err(|_| LedgerError::expense_not_found(input.trim()))
    }

    /// Largest amount the next expense may carry
    pub fn headroom(&self) -> Money {
        self.ledger.headroom()
    }

    /// Add a new expense from validated values
    ///
    /// The ledger still rejects a non-positive amount or one past its
    /// headroom, and a rejected expense does not consume an id.
    pub fn create(&mut self, input: CreateExpenseInput) -> LedgerResult<Expense> {
        let expense = self
            .ledger
            .insert(input.amount, input.category, &input.description, input.date)?;

        info!(
            id = %expense.id,
            amount = %expense.amount,
            category = expense.category.as_str(),
            "expense added"
        );

        Ok(expense)
    }

    /// All expenses in insertion order
    pub fn list_all(&self) -> &[Expense] {
        self.ledger.all()
    }

    /// Expenses in a category, with their total
    pub fn list_by_category(&self, category: Category) -> CategoryListing {
        let expenses = self.ledger.by_category(category);
        let total = expenses.iter().map(|e| e.amount).sum();
        debug!(category = category.as_str(), count = expenses.len(), "filtered by category");

        CategoryListing {
            category,
            expenses,
            total,
        }
    }

    /// Sum of every expense amount; zero for an empty ledger
    pub fn calculate_total(&self) -> Money {
        self.ledger.total()
    }

    /// Remove an expense given its id as raw input
    pub fn remove(&mut self, id_input: &str) -> LedgerResult<Expense> {
        let id = Self::parse_id(id_input)?;
        self.delete(id)
    }

    /// Remove an expense by id
    pub fn delete(&mut self, id: ExpenseId) -> LedgerResult<Expense> {
        let expense = self
            .ledger
            .remove(id)
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;

        info!(id = %expense.id, remaining = self.ledger.len(), "expense removed");

        Ok(expense)
    }

    /// Count expenses
    pub fn count(&self) -> usize {
        self.ledger.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    /// Run the three field parsers and create the expense, like the console does
    fn add(
        service: &mut ExpenseService<'_>,
        amount: &str,
        category: &str,
        description: &str,
    ) -> LedgerResult<Expense> {
        let amount = ExpenseService::parse_amount_within(amount, service.headroom())?;
        let category = ExpenseService::parse_category(category)?;
        service.create(CreateExpenseInput {
            amount,
            category,
            description: description.to_string(),
            date: today(),
        })
    }

    fn seed(ledger: &mut Ledger) {
        let mut service = ExpenseService::new(ledger);
        add(&mut service, "10", "food", "breakfast").unwrap();
        add(&mut service, "20", "transport", "taxi").unwrap();
        add(&mut service, "5.50", "FOOD", "snack").unwrap();
    }

    #[test]
    fn test_add_expense() {
        let mut ledger = Ledger::new();
        let mut service = ExpenseService::new(&mut ledger);

        let expense = add(&mut service, "12.50", "food", "  lunch ").unwrap();
        assert_eq!(expense.id, ExpenseId::new(1));
        assert_eq!(expense.amount, Money::from_cents(1250));
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.description, "lunch");
        assert_eq!(expense.date, today());
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_add_rejects_non_positive_amount() {
        let mut ledger = Ledger::new();
        let mut service = ExpenseService::new(&mut ledger);

        let err = add(&mut service, "-5", "food", "x").unwrap_err();
        assert!(matches!(err, LedgerError::NonPositiveAmount(_)));

        let err = add(&mut service, "0", "food", "x").unwrap_err();
        assert!(matches!(err, LedgerError::NonPositiveAmount(_)));

        assert_eq!(service.count(), 0);
        assert_eq!(ledger.next_id(), ExpenseId::FIRST);
    }

    #[test]
    fn test_create_rejects_non_positive_amount() {
        let mut ledger = Ledger::new();
        let mut service = ExpenseService::new(&mut ledger);

        let err = service
            .create(CreateExpenseInput {
                amount: Money::from_cents(-100),
                category: Category::Food,
                description: String::new(),
                date: today(),
            })
            .unwrap_err();
        assert!(matches!(err, LedgerError::NonPositiveAmount(_)));
        assert_eq!(ledger.next_id(), ExpenseId::FIRST);
    }

    #[test]
    fn test_add_rejects_bad_format_and_category() {
        let mut ledger = Ledger::new();
        let mut service = ExpenseService::new(&mut ledger);

        let err = add(&mut service, "ten", "food", "x").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmountFormat(ref s) if s == "ten"));

        let err = add(&mut service, "10", "space", "x").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidCategory(ref s) if s == "space"));

        assert_eq!(service.count(), 0);
        assert_eq!(ledger.next_id(), ExpenseId::FIRST);
    }

    #[test]
    fn test_sub_cent_amounts_are_rejected_not_rounded() {
        for input in ["0.001", "1.999"] {
            let err = ExpenseService::parse_amount(input).unwrap_err();
            assert!(
                matches!(err, LedgerError::TooManyDecimals(ref s) if s == input),
                "{:?}",
                input
            );
        }
        assert_eq!(
            ExpenseService::parse_amount("1.990").unwrap(),
            Money::from_cents(199)
        );
    }

    #[test]
    fn test_total_of_cent_amounts_is_exact() {
        let mut ledger = Ledger::new();
        let mut service = ExpenseService::new(&mut ledger);

        add(&mut service, "1.99", "food", "a").unwrap();
        add(&mut service, "2.01", "food", "b").unwrap();
        add(&mut service, "0.01", "transport", "c").unwrap();
        assert_eq!(service.calculate_total(), Money::from_cents(401));
    }

    #[test]
    fn test_huge_amounts_cannot_overflow_totals() {
        let mut ledger = Ledger::new();
        let mut service = ExpenseService::new(&mut ledger);

        add(&mut service, "90000000000000000", "food", "a").unwrap();
        let err = add(&mut service, "90000000000000000", "food", "b").unwrap_err();
        assert!(matches!(err, LedgerError::AmountTooLarge(_)));
        assert_eq!(service.count(), 1);

        let headroom = service.headroom();
        assert_eq!(headroom, Money::from_cents(i64::MAX - 9_000_000_000_000_000_000));
        add(&mut service, &headroom.format_with_symbol(""), "food", "c").unwrap();

        assert_eq!(service.calculate_total(), Money::MAX);
        assert_eq!(service.list_by_category(Category::Food).total, Money::MAX);
        let err = add(&mut service, "0.01", "transport", "d").unwrap_err();
        assert!(matches!(err, LedgerError::AmountTooLarge(h) if h == Money::zero()));
    }

    #[test]
    fn test_empty_description_allowed() {
        let mut ledger = Ledger::new();
        let mut service = ExpenseService::new(&mut ledger);
        let expense = add(&mut service, "1", "entertainment", "   ").unwrap();
        assert_eq!(expense.description, "");
    }

    #[test]
    fn test_list_by_category() {
        let mut ledger = Ledger::new();
        seed(&mut ledger);
        let service = ExpenseService::new(&mut ledger);

        let food = ExpenseService::parse_category(" Food ").unwrap();
        let listing = service.list_by_category(food);
        assert_eq!(listing.category, Category::Food);
        let ids: Vec<u64> = listing.expenses.iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(listing.total, Money::from_cents(1550));

        let empty = service.list_by_category(Category::Entertainment);
        assert!(empty.is_empty());
        assert_eq!(empty.total, Money::zero());

        assert!(matches!(
            ExpenseService::parse_category("rent"),
            Err(LedgerError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_calculate_total_tracks_add_and_remove() {
        let mut ledger = Ledger::new();
        let mut service = ExpenseService::new(&mut ledger);
        assert_eq!(service.calculate_total(), Money::zero());

        add(&mut service, "10", "food", "").unwrap();
        let before = service.calculate_total();
        let added = add(&mut service, "2.25", "transport", "").unwrap();
        assert_eq!(service.calculate_total(), before + added.amount);

        let removed = service.remove("1").unwrap();
        assert_eq!(service.calculate_total(), before + added.amount - removed.amount);
        let listed: Money = service.list_all().iter().map(|e| e.amount).sum();
        assert_eq!(service.calculate_total(), listed);
    }

    #[test]
    fn test_remove_expense() {
        let mut ledger = Ledger::new();
        seed(&mut ledger);
        let mut service = ExpenseService::new(&mut ledger);

        let removed = service.remove("2").unwrap();
        assert_eq!(removed.description, "taxi");
        let ids: Vec<u64> = service.list_all().iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);

        let err = service.remove("2").unwrap_err();
        assert!(matches!(err, LedgerError::NotFound { .. }));
        assert_eq!(err.to_string(), "No expense found with ID 2");
        assert_eq!(service.count(), 2);
    }

    #[test]
    fn test_remove_non_numeric_is_not_found() {
        let mut ledger = Ledger::new();
        seed(&mut ledger);
        let mut service = ExpenseService::new(&mut ledger);

        let err = service.remove(" abc ").unwrap_err();
        assert!(matches!(err, LedgerError::NotFound { .. }));
        assert_eq!(err.to_string(), "No expense found with ID abc");
        assert_eq!(service.count(), 3);
    }

    #[test]
    fn test_ids_keep_increasing_after_removal() {
        let mut ledger = Ledger::new();
        seed(&mut ledger);
        let mut service = ExpenseService::new(&mut ledger);

        service.remove("3").unwrap();
        let next = add(&mut service, "1", "food", "").unwrap();
        assert_eq!(next.id, ExpenseId::new(4));
    }
}
