//! Monthly expense processing
//!
//! Runs the full pipeline for one month: import each person's statement,
//! classify the expenses and record them as shared costs paid by the
//! statement's owner.

use std::path::PathBuf;

use log::info;

use crate::error::PennyResult;
use crate::models::{Person, StatementSource, Transaction};

use super::classifier::CategoryClassifier;
use super::import::import_bank_report;
use super::ledger::ExpenseLedger;

/// A person together with their bank statement for the month
#[derive(Debug, Clone)]
pub struct StatementOwner {
    pub person: Person,
    pub statement: PathBuf,
    pub source: StatementSource,
}

impl StatementOwner {
    pub fn new(person: Person, statement: impl Into<PathBuf>) -> Self {
        Self {
            person,
            statement: statement.into(),
            source: StatementSource::Csv,
        }
    }

    /// Tag the imported rows with a different source
    pub fn with_source(mut self, source: StatementSource) -> Self {
        self.source = source;
        self
    }
}

/// Result of processing a month: the filled ledger and each person's
/// categorized expenses
#[derive(Debug, Clone)]
pub struct MonthlyExpenses {
    pub ledger: ExpenseLedger,
    pub expenses_a: Vec<Transaction>,
    pub expenses_b: Vec<Transaction>,
}

/// Import, classify and record both persons' expenses
///
/// Every expense is treated as shared. `description_field` names the
/// transaction column classification runs on.
pub fn process_monthly_expenses(
    owner_a: StatementOwner,
    owner_b: StatementOwner,
    classifier: &CategoryClassifier<'_>,
    description_field: &str,
) -> PennyResult<MonthlyExpenses> {
    let statement_a = import_bank_report(&owner_a.statement, owner_a.source)?;
    let statement_b = import_bank_report(&owner_b.statement, owner_b.source)?;

    let expenses_a = classifier.classify_batch_by(&statement_a.expenses, description_field)?;
    let expenses_b = classifier.classify_batch_by(&statement_b.expenses, description_field)?;

    let name_a = owner_a.person.name.clone();
    let name_b = owner_b.person.name.clone();
    let mut ledger = ExpenseLedger::new(owner_a.person, owner_b.person)?;

    for (payer, expenses) in [(&name_a, &expenses_a), (&name_b, &expenses_b)] {
        for txn in expenses {
            ledger.add_expense(txn.category_name(), txn.amount, payer, true)?;
        }
    }

    info!(
        "Recorded {} expenses for {} and {} for {}",
        expenses_a.len(),
        name_a,
        expenses_b.len(),
        name_b
    );

    Ok(MonthlyExpenses {
        ledger,
        expenses_a,
        expenses_b,
    })
}
