//! Configuration module for the expense ledger
//!
//! Settings are held in memory for the life of a session. There is no
//! settings file: the ledger persists nothing between runs.

pub mod settings;

pub use settings::Settings;
