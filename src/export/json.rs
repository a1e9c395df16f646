//! JSON Export functionality
//!
//! Writes categorized transactions and settlement reports as JSON. Non-ASCII
//! text (Finnish merchant names) is written as-is.

use std::io::Write;

use crate::error::{PennyError, PennyResult};
use crate::models::Transaction;
use crate::reports::SettlementReport;

/// Export transactions as a JSON array of records
pub fn export_transactions_json<W: Write>(
    writer: &mut W,
    transactions: &[Transaction],
    pretty: bool,
) -> PennyResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, transactions)
    } else {
        serde_json::to_writer(writer, transactions)
    }
    .map_err(|e| PennyError::Export(e.to_string()))
}

/// Export a settlement report
pub fn export_settlement_json<W: Write>(
    writer: &mut W,
    report: &SettlementReport,
    pretty: bool,
) -> PennyResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, report)
    } else {
        serde_json::to_writer(writer, report)
    }
    .map_err(|e| PennyError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Person;
    use crate::services::ExpenseLedger;

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let txn = Transaction::new("MEHILÄINEN", 80.0);
        let mut output = Vec::new();
        export_transactions_json(&mut output, &[txn], false).unwrap();

        let json = String::from_utf8(output).unwrap();
        assert!(json.contains("MEHILÄINEN"));
        assert!(json.starts_with('['));
    }

    #[test]
    fn test_settlement_json() {
        let mut ledger =
            ExpenseLedger::new(Person::new("Alice", 3000.0), Person::new("Bob", 2000.0)).unwrap();
        ledger.add_expense("rent", 1000.0, "Alice", true).unwrap();
        ledger.add_expense("utilities", 200.0, "Bob", true).unwrap();
        let report = SettlementReport::generate(&ledger).unwrap();

        let mut output = Vec::new();
        export_settlement_json(&mut output, &report, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["total_shared_expenses"], 1200.0);
        assert_eq!(value["person_b"]["name"], "Bob");
        assert_eq!(value["summary"], "Bob owes Alice €280.00");
    }
}
