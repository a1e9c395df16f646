//! Person model
//!
//! One party of a two-person household: their monthly income and what they
//! have spent, split into personal spending and payments toward shared costs.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors for persons
#[derive(Debug, Clone, PartialEq)]
pub enum PersonValidationError {
    EmptyName,
    NegativeIncome(f64),
    NonFiniteIncome,
}

impl fmt::Display for PersonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Person name cannot be empty"),
            Self::NegativeIncome(v) => write!(f, "Monthly income cannot be negative: {}", v),
            Self::NonFiniteIncome => write!(f, "Monthly income must be a finite number"),
        }
    }
}

impl std::error::Error for PersonValidationError {}

/// A party's income and expense accumulators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique name within a ledger
    pub name: String,

    /// Monthly income
    pub monthly_income: f64,

    /// Category -> amount spent on this person alone
    #[serde(default)]
    pub personal_expenses: BTreeMap<String, f64>,

    /// Category -> amount this person paid toward shared costs
    #[serde(default)]
    pub shared_expenses_paid: BTreeMap<String, f64>,
}

impl Person {
    /// Create a new person with empty expense maps
    pub fn new(name: impl Into<String>, monthly_income: f64) -> Self {
        Self {
            name: name.into(),
            monthly_income,
            personal_expenses: BTreeMap::new(),
            shared_expenses_paid: BTreeMap::new(),
        }
    }

    /// Validate the person
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if self.name.trim().is_empty() {
            return Err(PersonValidationError::EmptyName);
        }
        if !self.monthly_income.is_finite() {
            return Err(PersonValidationError::NonFiniteIncome);
        }
        if self.monthly_income < 0.0 {
            return Err(PersonValidationError::NegativeIncome(self.monthly_income));
        }
        Ok(())
    }

    /// Sum of all shared payments across categories
    pub fn total_shared_paid(&self) -> f64 {
        self.shared_expenses_paid.values().sum()
    }

    /// Sum of all personal spending across categories
    pub fn total_personal(&self) -> f64 {
        self.personal_expenses.values().sum()
    }

    pub(crate) fn record_shared(&mut self, category: &str, amount: f64) {
        *self
            .shared_expenses_paid
            .entry(category.to_string())
            .or_insert(0.0) += amount;
    }

    pub(crate) fn record_personal(&mut self, category: &str, amount: f64) {
        *self
            .personal_expenses
            .entry(category.to_string())
            .or_insert(0.0) += amount;
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_person() {
        let person = Person::new("Test", 1500.0);
        assert_eq!(person.name, "Test");
        assert_eq!(person.monthly_income, 1500.0);
        assert!(person.personal_expenses.is_empty());
        assert!(person.shared_expenses_paid.is_empty());
    }

    #[test]
    fn test_maps_are_not_shared_between_instances() {
        let mut a = Person::new("A", 0.0);
        let b = Person::new("B", 0.0);

        a.record_shared("rent", 100.0);
        a.record_personal("gym", 30.0);

        assert!(b.shared_expenses_paid.is_empty());
        assert!(b.personal_expenses.is_empty());
    }

    #[test]
    fn test_accumulates_per_category() {
        let mut person = Person::new("A", 0.0);
        person.record_shared("food", 10.0);
        person.record_shared("food", 5.5);
        person.record_shared("rent", 100.0);

        assert_eq!(person.shared_expenses_paid["food"], 15.5);
        assert_eq!(person.total_shared_paid(), 115.5);
        assert_eq!(person.total_personal(), 0.0);
    }

    #[test]
    fn test_validation() {
        assert!(Person::new("Alice", 0.0).validate().is_ok());
        assert_eq!(
            Person::new("  ", 10.0).validate(),
            Err(PersonValidationError::EmptyName)
        );
        assert_eq!(
            Person::new("Alice", -1.0).validate(),
            Err(PersonValidationError::NegativeIncome(-1.0))
        );
        assert_eq!(
            Person::new("Alice", f64::NAN).validate(),
            Err(PersonValidationError::NonFiniteIncome)
        );
    }
}
