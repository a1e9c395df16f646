//! Core data models for PennyWise
//!
//! This module contains the data structures of the expense-splitting domain:
//! persons, statement transactions and the category mapping.

pub mod category;
pub mod person;
pub mod transaction;

pub use category::{CategoryMapping, CategoryRule, UNCATEGORIZED};
pub use person::{Person, PersonValidationError};
pub use transaction::{StatementSource, Transaction, TEXT_FIELDS};
