//! Interactive ledger session
//!
//! A session owns the ledger for one run of the program and drives it from a
//! menu loop. Each operation that needs more input runs its own prompts and
//! re-asks only the field that was rejected.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::config::Settings;
use crate::display::{
    format_category_listing, format_expense_list, format_removal, format_report, format_total,
};
use crate::error::LedgerResult;
use crate::models::Category;
use crate::reports::ExpenseReport;
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::Ledger;

use super::menu::{render_menu, MenuChoice, MENU_PROMPT};
use super::prompt::Console;

const AMOUNT_PROMPT: &str = "Enter amount: ";
const DESCRIPTION_PROMPT: &str = "Enter description: ";
const FILTER_CATEGORY_PROMPT: &str = "Enter category: ";
const REMOVE_ID_PROMPT: &str = "Enter ID of expense to remove: ";

/// Whether the menu loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Today's date from the local system clock
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// One interactive run over an in-memory ledger
pub struct Session<R, W> {
    console: Console<R, W>,
    ledger: Ledger,
    settings: Settings,
    today: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty ledger and default settings
    pub fn new(input: R, output: W) -> Self {
        Self {
            console: Console::new(input, output),
            ledger: Ledger::new(),
            settings: Settings::default(),
            today: local_today,
        }
    }

    /// Use custom display settings
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Use a different clock for expense and report dates
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The ledger as it currently stands
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// End the session and return the output writer
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the menu loop until the user exits or input runs out
    pub fn run(&mut self) -> LedgerResult<()> {
        info!("session started");

        while self.step()? == LoopControl::Continue {}

        info!(expenses = self.ledger.len(), "session ended");
        Ok(())
    }

    /// Show the menu once and handle one choice
    pub fn step(&mut self) -> LedgerResult<LoopControl> {
        self.console.say(&render_menu())?;

        let Some(line) = self.console.prompt(MENU_PROMPT)? else {
            return Ok(LoopControl::Exit);
        };

        match MenuChoice::parse(&line) {
            Ok(choice) => {
                debug!(choice = choice.key(), "menu dispatch");
                self.dispatch(choice)
            }
            Err(err) => {
                debug!(input = %line.trim(), "invalid menu choice");
                self.console.say(&format!("{}\n", err))?;
                Ok(LoopControl::Continue)
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> LedgerResult<LoopControl> {
        match choice {
            MenuChoice::AddExpense => self.add_expense(),
            MenuChoice::ViewAll => self.view_all(),
            MenuChoice::ViewByCategory => self.view_by_category(),
            MenuChoice::CalculateTotal => self.calculate_total(),
            MenuChoice::RemoveExpense => self.remove_expense(),
            MenuChoice::GenerateReport => self.generate_report(),
            MenuChoice::Exit => {
                self.console.say("Goodbye!\n")?;
                Ok(LoopControl::Exit)
            }
        }
    }

    /// Prompt until `parse` accepts the line; `None` if input runs out
    fn read_until_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> LedgerResult<T>,
    ) -> LedgerResult<Option<T>> {
        loop {
            let Some(line) = self.console.prompt(prompt)? else {
                return Ok(None);
            };

            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    debug!(error = %err, "input rejected");
                    self.console.error(&err)?;
                }
            }
        }
    }

    fn add_expense(&mut self) -> LedgerResult<LoopControl> {
        let headroom = self.ledger.headroom();
        let Some(amount) = self.read_until_valid(AMOUNT_PROMPT, |line| {
            ExpenseService::parse_amount_within(line, headroom)
        })?
        else {
            return Ok(LoopControl::Exit);
        };

        let category_prompt = format!("Enter expense type ({}): ", Category::choices());
        let Some(category) =
            self.read_until_valid(&category_prompt, ExpenseService::parse_category)?
        else {
            return Ok(LoopControl::Exit);
        };

        let Some(description) = self.console.prompt(DESCRIPTION_PROMPT)? else {
            return Ok(LoopControl::Exit);
        };

        let input = CreateExpenseInput {
            amount,
            category,
            description: description.trim().to_string(),
            date: (self.today)(),
        };

        match ExpenseService::new(&mut self.ledger).create(input) {
            Ok(expense) => self
                .console
                .say(&format!("Expense added successfully! ID: {}\n", expense.id))?,
            Err(err) => self.console.error(&err)?,
        }

        Ok(LoopControl::Continue)
    }

    fn view_all(&mut self) -> LedgerResult<LoopControl> {
        let service = ExpenseService::new(&mut self.ledger);
        let text = format_expense_list(service.list_all(), &self.settings);
        self.console.say(&text)?;
        Ok(LoopControl::Continue)
    }

    fn view_by_category(&mut self) -> LedgerResult<LoopControl> {
        let Some(category) =
            self.read_until_valid(FILTER_CATEGORY_PROMPT, ExpenseService::parse_category)?
        else {
            return Ok(LoopControl::Exit);
        };

        let listing = ExpenseService::new(&mut self.ledger).list_by_category(category);
        let text = format_category_listing(&listing, &self.settings);
        self.console.say(&text)?;
        Ok(LoopControl::Continue)
    }

    fn calculate_total(&mut self) -> LedgerResult<LoopControl> {
        let service = ExpenseService::new(&mut self.ledger);
        let text = format_total(service.calculate_total(), service.count(), &self.settings);
        self.console.say(&text)?;
        Ok(LoopControl::Continue)
    }

    fn remove_expense(&mut self) -> LedgerResult<LoopControl> {
        self.view_all()?;
        if self.ledger.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let Some(line) = self.console.prompt(REMOVE_ID_PROMPT)? else {
            return Ok(LoopControl::Exit);
        };

        let mut service = ExpenseService::new(&mut self.ledger);
        match service.remove(&line) {
            Ok(expense) => {
                let text = format_removal(&expense, service.count(), &self.settings);
                self.console.say(&text)?;
                self.view_all()?;
            }
            Err(err) => {
                debug!(error = %err, "removal rejected");
                self.console.error(&err)?;
            }
        }

        Ok(LoopControl::Continue)
    }

    fn generate_report(&mut self) -> LedgerResult<LoopControl> {
        let service = ExpenseService::new(&mut self.ledger);
        let report = ExpenseReport::generate(service.list_all(), (self.today)());
        let text = format_report(report.as_ref(), &self.settings);
        self.console.say(&text)?;
        Ok(LoopControl::Continue)
    }
}
