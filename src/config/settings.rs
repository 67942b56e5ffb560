//! Display settings
//!
//! Controls how amounts and dates are rendered on the console.

use serde::{Deserialize, Serialize};

/// User-facing formatting preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol prefixed to every amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for expense rows (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Month label format for report headers (strftime format)
    #[serde(default = "default_report_month_format")]
    pub report_month_format: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_report_month_format() -> String {
    "%B %Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            report_month_format: default_report_month_format(),
        }
    }
}

impl Settings {
    /// Use a different currency symbol
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }
}
