//! Settlement report
//!
//! Compares each person's fair share of the shared costs with what they
//! actually paid and states who owes whom. A report is a snapshot of the
//! ledger at generation time; regenerate it after the ledger changes.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PennyError, PennyResult};
use crate::services::{ExpenseLedger, FairShareCalculator};

/// Balances below this magnitude count as settled
pub const BALANCE_EPSILON: f64 = 0.01;

/// Currency symbol used by [`SettlementReport::generate`]
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// Summary text for a settled ledger
pub const BALANCED_SUMMARY: &str = "All expenses are perfectly balanced";

/// One person's line in the settlement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonBalance {
    pub name: String,
    pub fair_share: f64,
    pub actual_paid: f64,
    /// Positive: this person owes. Negative: this person is owed.
    pub balance: f64,
}

/// Who owes whom, derived from a ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementReport {
    pub total_shared_expenses: f64,
    pub person_a: PersonBalance,
    pub person_b: PersonBalance,
    pub summary: String,
    /// True when the balance was within the settle epsilon
    pub balanced: bool,
    pub generated_at: DateTime<Utc>,
}

impl SettlementReport {
    /// Generate a report with the default currency symbol and epsilon
    pub fn generate(ledger: &ExpenseLedger) -> PennyResult<Self> {
        Self::generate_with(ledger, DEFAULT_CURRENCY_SYMBOL, BALANCE_EPSILON)
    }

    /// Generate a report with a custom currency symbol and settle epsilon
    pub fn generate_with(
        ledger: &ExpenseLedger,
        currency_symbol: &str,
        epsilon: f64,
    ) -> PennyResult<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(PennyError::Validation(format!(
                "Settle epsilon must be a positive number, got {}",
                epsilon
            )));
        }

        let (fair_share_a, fair_share_b) = FairShareCalculator::fair_shares(ledger);

        let name_a = &ledger.person_a().name;
        let name_b = &ledger.person_b().name;
        let actual_paid_a = ledger.person_shared_paid(name_a)?;
        let actual_paid_b = ledger.person_shared_paid(name_b)?;

        let balance_a = fair_share_a - actual_paid_a;
        // Closed two-party system: B's balance is exactly the negation of A's
        let balance_b = -balance_a;
        let balanced = balance_a.abs() < epsilon;

        debug!(
            "Settlement: {} fair {:.2} paid {:.2} balance {:.2}; {} fair {:.2} paid {:.2} balance {:.2}",
            name_a, fair_share_a, actual_paid_a, balance_a,
            name_b, fair_share_b, actual_paid_b, balance_b
        );

        Ok(Self {
            total_shared_expenses: ledger.total_shared_expenses(),
            person_a: PersonBalance {
                name: name_a.clone(),
                fair_share: fair_share_a,
                actual_paid: actual_paid_a,
                balance: balance_a,
            },
            person_b: PersonBalance {
                name: name_b.clone(),
                fair_share: fair_share_b,
                actual_paid: actual_paid_b,
                balance: balance_b,
            },
            summary: summarize(name_a, name_b, balance_a, balanced, currency_symbol),
            balanced,
            generated_at: Utc::now(),
        })
    }

    /// Whether the balances are within the epsilon used for the summary
    pub fn is_balanced(&self) -> bool {
        self.balanced
    }

    /// `(debtor, creditor, amount)`, or `None` when settled
    pub fn debtor(&self) -> Option<(&PersonBalance, &PersonBalance, f64)> {
        if self.is_balanced() {
            return None;
        }
        if self.person_a.balance > 0.0 {
            Some((&self.person_a, &self.person_b, self.person_a.balance))
        } else {
            Some((&self.person_b, &self.person_a, self.person_b.balance))
        }
    }
}

fn summarize(name_a: &str, name_b: &str, balance_a: f64, balanced: bool, symbol: &str) -> String {
    if balanced {
        return BALANCED_SUMMARY.to_string();
    }

    let (debtor, creditor) = if balance_a > 0.0 {
        (name_a, name_b)
    } else {
        (name_b, name_a)
    };

    format!(
        "{} owes {} {}{:.2}",
        debtor,
        creditor,
        symbol,
        balance_a.abs()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Person;

    const EPS: f64 = 1e-9;

    fn ledger(income_a: f64, income_b: f64) -> ExpenseLedger {
        ExpenseLedger::new(Person::new("Alice", income_a), Person::new("Bob", income_b)).unwrap()
    }

    #[test]
    fn test_alice_overpaid() {
        let mut ledger = ledger(3000.0, 2000.0);
        ledger.add_expense("rent", 1000.0, "Alice", true).unwrap();
        ledger.add_expense("utilities", 200.0, "Bob", true).unwrap();

        let report = SettlementReport::generate(&ledger).unwrap();

        assert_eq!(report.total_shared_expenses, 1200.0);
        assert!((report.person_a.fair_share - 720.0).abs() < EPS);
        assert!((report.person_b.fair_share - 480.0).abs() < EPS);
        assert_eq!(report.person_a.actual_paid, 1000.0);
        assert_eq!(report.person_b.actual_paid, 200.0);
        assert!((report.person_a.balance + 280.0).abs() < EPS);
        assert!((report.person_b.balance - 280.0).abs() < EPS);
        assert_eq!(report.summary, "Bob owes Alice €280.00");

        let (debtor, creditor, amount) = report.debtor().unwrap();
        assert_eq!(debtor.name, "Bob");
        assert_eq!(creditor.name, "Alice");
        assert!((amount - 280.0).abs() < EPS);
    }

    #[test]
    fn test_person_a_owes() {
        let mut ledger = ledger(3000.0, 2000.0);
        ledger.add_expense("rent", 1000.0, "Bob", true).unwrap();

        let report = SettlementReport::generate(&ledger).unwrap();
        assert_eq!(report.summary, "Alice owes Bob €600.00");
    }

    #[test]
    fn test_balanced() {
        let mut ledger = ledger(2500.0, 2500.0);
        ledger.add_expense("rent", 500.0, "Alice", true).unwrap();
        ledger.add_expense("food", 500.0, "Bob", true).unwrap();

        let report = SettlementReport::generate(&ledger).unwrap();
        assert_eq!(report.summary, "All expenses are perfectly balanced");
        assert!(report.is_balanced());
        assert!(report.debtor().is_none());
    }

    #[test]
    fn test_sub_cent_difference_is_balanced() {
        let mut ledger = ledger(1000.0, 1000.0);
        ledger.add_expense("food", 100.0, "Alice", true).unwrap();
        ledger.add_expense("food", 100.009, "Bob", true).unwrap();

        let report = SettlementReport::generate(&ledger).unwrap();
        assert!(report.is_balanced());
    }

    #[test]
    fn test_zero_sum() {
        let mut ledger = ledger(3333.33, 1234.56);
        ledger.add_expense("food", 87.31, "Alice", true).unwrap();
        ledger.add_expense("rent", 1111.11, "Bob", true).unwrap();
        ledger.add_expense("transport", 2.8, "Alice", true).unwrap();

        let report = SettlementReport::generate(&ledger).unwrap();
        assert_eq!(report.person_a.balance + report.person_b.balance, 0.0);
    }

    #[test]
    fn test_empty_ledger_is_balanced() {
        let report = SettlementReport::generate(&ledger(3000.0, 2000.0)).unwrap();
        assert_eq!(report.total_shared_expenses, 0.0);
        assert!(report.is_balanced());
    }

    #[test]
    fn test_personal_expenses_do_not_affect_settlement() {
        let mut ledger = ledger(1000.0, 1000.0);
        ledger.add_expense("rent", 400.0, "Alice", true).unwrap();
        let before = SettlementReport::generate(&ledger).unwrap();

        ledger.add_expense("hobby", 300.0, "Bob", false).unwrap();
        let after = SettlementReport::generate(&ledger).unwrap();

        assert_eq!(before.summary, after.summary);
        assert_eq!(before.person_b.balance, after.person_b.balance);
    }

    #[test]
    fn test_custom_currency_symbol() {
        let mut ledger = ledger(1000.0, 1000.0);
        ledger.add_expense("rent", 100.0, "Alice", true).unwrap();

        let report = SettlementReport::generate_with(&ledger, "$", BALANCE_EPSILON).unwrap();
        assert_eq!(report.summary, "Bob owes Alice $50.00");
    }

    #[test]
    fn test_invalid_epsilon_rejected() {
        let ledger = ledger(1000.0, 1000.0);
        for epsilon in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
            let err = SettlementReport::generate_with(&ledger, "€", epsilon).unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn test_tiny_epsilon_reports_sub_cent_debt() {
        let mut ledger = ledger(1000.0, 1000.0);
        ledger.add_expense("food", 100.0, "Alice", true).unwrap();
        ledger.add_expense("food", 100.004, "Bob", true).unwrap();

        let report = SettlementReport::generate_with(&ledger, "€", 1e-6).unwrap();
        assert!(!report.is_balanced());
        assert_eq!(report.summary, "Alice owes Bob €0.00");
        assert_eq!(report.debtor().unwrap().0.name, "Alice");
    }

    #[test]
    fn test_balanced_flag_independent_of_summary_text() {
        let mut ledger = ledger(1000.0, 1000.0);
        ledger.add_expense("rent", 100.0, "Alice", true).unwrap();
        let mut report = SettlementReport::generate(&ledger).unwrap();
        assert!(!report.balanced);

        report.summary = BALANCED_SUMMARY.to_string();
        assert!(!report.is_balanced());
        assert!(report.debtor().is_some());
    }

    #[test]
    fn test_report_serializes() {
        let report = SettlementReport::generate(&ledger(1.0, 1.0)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["person_a"]["name"], "Alice");
        assert_eq!(json["summary"], BALANCED_SUMMARY);
        assert_eq!(json["balanced"], true);
    }
}
