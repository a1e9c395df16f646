//! Fair share calculation
//!
//! Splits shared costs in proportion to monthly income.

use crate::models::Person;

use super::ledger::ExpenseLedger;

/// Computes income ratios and the resulting fair shares
pub struct FairShareCalculator;

impl FairShareCalculator {
    /// Income ratio of each person, `(ratio_a, ratio_b)`
    ///
    /// With zero combined income the split is 50/50. `ratio_b` is derived as
    /// `1 - ratio_a` so the pair always sums to one.
    pub fn income_ratio(person_a: &Person, person_b: &Person) -> (f64, f64) {
        let total_income = person_a.monthly_income + person_b.monthly_income;
        if total_income == 0.0 {
            return (0.5, 0.5);
        }

        let ratio_a = person_a.monthly_income / total_income;
        (ratio_a, 1.0 - ratio_a)
    }

    /// How much of the shared total each person should bear
    pub fn fair_shares(ledger: &ExpenseLedger) -> (f64, f64) {
        let (ratio_a, ratio_b) = Self::income_ratio(ledger.person_a(), ledger.person_b());
        let total_shared = ledger.total_shared_expenses();
        (total_shared * ratio_a, total_shared * ratio_b)
    }
}
