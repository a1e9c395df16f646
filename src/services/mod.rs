//! Service layer for PennyWise
//!
//! The service layer holds the business logic: classifying transactions,
//! recording expenses and computing fair shares, plus statement import and
//! the monthly processing pipeline built on them.

pub mod classifier;
pub mod fair_share;
pub mod import;
pub mod ledger;
pub mod monthly;

pub use classifier::{load_mapping, override_category, validate_text_field, CategoryClassifier};
pub use fair_share::FairShareCalculator;
pub use import::{import_bank_report, transaction_summary, ImportedStatement};
pub use ledger::ExpenseLedger;
pub use monthly::{process_monthly_expenses, MonthlyExpenses, StatementOwner};
