//! Expense ledger
//!
//! Records who paid what for a two-person household. Shared expenses feed
//! the settlement; personal expenses are tracked per person only.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::error::{PennyError, PennyResult};
use crate::models::Person;

/// The mutable record of shared and personal spending for two persons
#[derive(Debug, Clone)]
pub struct ExpenseLedger {
    person_a: Person,
    person_b: Person,
    /// Category -> total paid toward shared costs by both persons
    shared_expenses: BTreeMap<String, f64>,
    created_at: DateTime<Utc>,
}

/// Which side of the ledger a name resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Party {
    A,
    B,
}

impl ExpenseLedger {
    /// Create a ledger for two persons
    ///
    /// Both persons must be valid and their names must differ, since names are
    /// how payers are resolved.
    pub fn new(person_a: Person, person_b: Person) -> PennyResult<Self> {
        person_a
            .validate()
            .map_err(|e| PennyError::Validation(e.to_string()))?;
        person_b
            .validate()
            .map_err(|e| PennyError::Validation(e.to_string()))?;

        if person_a.name == person_b.name {
            return Err(PennyError::Validation(format!(
                "Both persons are named '{}'; names must be distinct",
                person_a.name
            )));
        }

        Ok(Self {
            person_a,
            person_b,
            shared_expenses: BTreeMap::new(),
            created_at: Utc::now(),
        })
    }

    pub fn person_a(&self) -> &Person {
        &self.person_a
    }

    pub fn person_b(&self) -> &Person {
        &self.person_b
    }

    /// Shared totals per category
    pub fn shared_expenses(&self) -> &BTreeMap<String, f64> {
        &self.shared_expenses
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Find a registered person by name
    pub fn person(&self, name: &str) -> PennyResult<&Person> {
        Ok(match self.resolve(name)? {
            Party::A => &self.person_a,
            Party::B => &self.person_b,
        })
    }

    fn resolve(&self, name: &str) -> PennyResult<Party> {
        if name == self.person_a.name {
            Ok(Party::A)
        } else if name == self.person_b.name {
            Ok(Party::B)
        } else {
            Err(PennyError::UnknownPerson(name.to_string()))
        }
    }

    /// Record an expense paid by `payer`
    ///
    /// Shared expenses go to both the payer's shared payments and the ledger's
    /// shared pool; personal expenses only to the payer's personal spending.
    /// On error nothing is modified.
    pub fn add_expense(
        &mut self,
        category: &str,
        amount: f64,
        payer: &str,
        is_shared: bool,
    ) -> PennyResult<()> {
        let party = match self.resolve(payer) {
            Ok(party) => party,
            Err(e) => {
                warn!("Rejected expense of {:.2} in '{}': {}", amount, category, e);
                return Err(e);
            }
        };

        if !amount.is_finite() || amount < 0.0 {
            return Err(PennyError::Validation(format!(
                "Expense amount must be a non-negative number, got {}",
                amount
            )));
        }

        let person = match party {
            Party::A => &mut self.person_a,
            Party::B => &mut self.person_b,
        };

        if is_shared {
            person.record_shared(category, amount);
            *self
                .shared_expenses
                .entry(category.to_string())
                .or_insert(0.0) += amount;
        } else {
            person.record_personal(category, amount);
        }

        debug!(
            "{} paid {:.2} for {} ({})",
            payer,
            amount,
            category,
            if is_shared { "shared" } else { "personal" }
        );
        Ok(())
    }

    /// Sum of all shared expenses across categories
    pub fn total_shared_expenses(&self) -> f64 {
        self.shared_expenses.values().sum()
    }

    /// Sum of the shared expenses paid by `name`
    pub fn person_shared_paid(&self, name: &str) -> PennyResult<f64> {
        Ok(self.person(name)?.total_shared_paid())
    }
}
