//! Reports module for PennyWise
//!
//! Derived, read-only views over ledger state.

pub mod settlement;

pub use settlement::{PersonBalance, SettlementReport};
