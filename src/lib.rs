//! PennyWise - income-proportional expense splitting for two-person households
//!
//! This library classifies bank transactions into spending categories by
//! keyword, records who paid for what, and works out how much one person owes
//! the other when shared costs are split in proportion to income.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (persons, transactions, category mapping)
//! - `services`: Classification, expense ledger, fair shares, statement import
//! - `reports`: Settlement report derived from a ledger
//! - `export`: CSV, JSON and YAML output
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `pennywise` binary
//!
//! # Example
//!
//! ```rust
//! use pennywise::models::Person;
//! use pennywise::reports::SettlementReport;
//! use pennywise::services::ExpenseLedger;
//!
//! let mut ledger = ExpenseLedger::new(
//!     Person::new("Alice", 3000.0),
//!     Person::new("Bob", 2000.0),
//! )?;
//! ledger.add_expense("rent", 1000.0, "Alice", true)?;
//! ledger.add_expense("utilities", 200.0, "Bob", true)?;
//!
//! let report = SettlementReport::generate(&ledger)?;
//! assert_eq!(report.summary, "Bob owes Alice €280.00");
//! # Ok::<(), pennywise::PennyError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{PennyError, PennyResult};
