//! Storage layer for the expense ledger
//!
//! Session state lives entirely in memory; see [`Ledger`].

pub mod ledger;

pub use ledger::Ledger;
