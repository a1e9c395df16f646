//! CSV Export functionality
//!
//! Exports categorized transactions to CSV, one row per transaction.

use std::io::Write;

use crate::error::{PennyError, PennyResult};
use crate::models::Transaction;

const HEADER: [&str; 14] = [
    "posting_date",
    "payment_date",
    "amount",
    "transaction_type",
    "payer",
    "recipient_name",
    "recipient_account",
    "recipient_bic",
    "reference_number",
    "message",
    "archive_id",
    "source",
    "category",
    "auto_categorized",
];

/// Export transactions, including their category and auto-categorized flag
///
/// Quoting follows RFC 4180, so free-text fields may hold separators,
/// quotes and line breaks.
pub fn export_transactions_csv<W: Write>(
    writer: &mut W,
    transactions: &[Transaction],
) -> PennyResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER).map_err(export_error)?;

    for txn in transactions {
        let date = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();

        csv_writer
            .write_record([
                date(txn.posting_date).as_str(),
                date(txn.payment_date).as_str(),
                format!("{:.2}", txn.amount).as_str(),
                txn.transaction_type.as_str(),
                txn.payer.as_str(),
                txn.recipient_name.as_str(),
                txn.recipient_account.as_str(),
                txn.recipient_bic.as_str(),
                txn.reference_number.as_str(),
                txn.message.as_str(),
                txn.archive_id.as_str(),
                txn.source.as_str(),
                txn.category_name(),
                if txn.auto_categorized { "true" } else { "false" },
            ])
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| PennyError::Export(e.to_string()))?;
    Ok(())
}

fn export_error(e: ::csv::Error) -> PennyError {
    PennyError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_export_transactions_csv() {
        let mut txn = Transaction::new("LIDL HELSINKI", 45.2);
        txn.posting_date = NaiveDate::from_ymd_opt(2024, 3, 1);
        txn.category = Some("food".into());
        txn.auto_categorized = true;

        let mut output = Vec::new();
        export_transactions_csv(&mut output, &[txn]).unwrap();

        let csv = String::from_utf8(output).unwrap();
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().ends_with("category,auto_categorized"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("2024-03-01,,45.20,"));
        assert!(row.ends_with("food,true"));
    }

    #[test]
    fn test_csv_is_readable_by_csv_reader() {
        let mut txn = Transaction::new("SHOP, \"THE\" OY", 1.0);
        txn.message = "line one".into();

        let mut output = Vec::new();
        export_transactions_csv(&mut output, &[txn]).unwrap();

        let mut reader = ::csv::Reader::from_reader(output.as_slice());
        let headers = reader.headers().unwrap().clone();
        let record = reader.records().next().unwrap().unwrap();
        let idx = headers.iter().position(|h| h == "recipient_name").unwrap();
        assert_eq!(&record[idx], "SHOP, \"THE\" OY");
    }

    #[test]
    fn test_line_breaks_stay_in_one_record() {
        let mut txn = Transaction::new("SHOP\r\nOY", 2.0);
        txn.message = "a\rb".into();
        txn.reference_number = "x\ny".into();

        let mut output = Vec::new();
        export_transactions_csv(&mut output, &[txn.clone(), txn]).unwrap();

        let mut reader = ::csv::Reader::from_reader(output.as_slice());
        let headers = reader.headers().unwrap().clone();
        let records: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);

        let message = headers.iter().position(|h| h == "message").unwrap();
        let recipient = headers.iter().position(|h| h == "recipient_name").unwrap();
        assert_eq!(&records[0][message], "a\rb");
        assert_eq!(&records[1][recipient], "SHOP\r\nOY");
    }
}
