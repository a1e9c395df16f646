//! Bank statement import
//!
//! Reads bank statements in the Finnish bank export layout, either as
//! semicolon-separated CSV or as an Excel workbook. Column names and Finnish
//! number/date formats are normalized and the rows are split into income
//! and expenses.

use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Data, DataType, Reader};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use serde::Serialize;

use crate::error::{PennyError, PennyResult};
use crate::models::{StatementSource, Transaction};

/// Finnish statement headers and their normalized names
pub const COLUMN_MAPPINGS: [(&str, &str); 11] = [
    ("Kirjauspäivä", "posting_date"),
    ("Maksupäivä", "payment_date"),
    ("Summa", "amount"),
    ("Tapahtumalaji", "transaction_type"),
    ("Maksaja", "payer"),
    ("Saajan nimi", "recipient_name"),
    ("Saajan tilinumero", "recipient_account"),
    ("Saajan BIC-tunnus", "recipient_bic"),
    ("Viitenumero", "reference_number"),
    ("Viesti", "message"),
    ("Arkistointitunnus", "archive_id"),
];

/// A statement split by sign of the amount
///
/// Expense amounts are stored as positive values.
#[derive(Debug, Clone, Default)]
pub struct ImportedStatement {
    pub income: Vec<Transaction>,
    pub expenses: Vec<Transaction>,
}

/// Per transaction-type statistics for a set of transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeSummary {
    pub transaction_type: String,
    pub count: usize,
    /// Sum rounded to two decimals
    pub total: f64,
    pub first_posting: Option<NaiveDate>,
    pub last_posting: Option<NaiveDate>,
}

/// Convert a Finnish formatted amount ("-12,50", "+1 000,00") to f64
pub fn clean_amount(s: &str) -> Result<f64, String> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Could not parse amount: '{}'", s))
}

/// Parse a Finnish date (DD.MM.YYYY)
pub fn parse_finnish_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%d.%m.%Y")
        .map_err(|_| format!("Could not parse date: '{}'", s))
}

/// Map a header to its normalized column name
fn normalize_header(header: &str) -> String {
    let header = header.trim().trim_start_matches('\u{feff}');
    COLUMN_MAPPINGS
        .iter()
        .find(|(finnish, _)| *finnish == header)
        .map(|(_, english)| english.to_string())
        .unwrap_or_else(|| header.to_string())
}

/// Import a statement file
///
/// `.csv` files are read as semicolon-separated text; `.xlsx` and `.xls`
/// files are read from their first worksheet. Every row is tagged with
/// `source`.
pub fn import_bank_report(path: &Path, source: StatementSource) -> PennyResult<ImportedStatement> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let statement = match extension.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).map_err(|e| {
                PennyError::Io(format!("Failed to open statement {}: {}", path.display(), e))
            })?;
            parse_statement(file, source)?
        }
        "xlsx" | "xls" => parse_workbook(path, source)?,
        _ => {
            return Err(PennyError::UnsupportedFormat(format!(
                "statement file '{}' (expected .csv, .xlsx or .xls)",
                path.display()
            )))
        }
    };

    info!(
        "Imported {}: {} income rows, {} expense rows",
        path.display(),
        statement.income.len(),
        statement.expenses.len()
    );
    Ok(statement)
}

/// Parse a semicolon-separated statement from any reader
pub fn parse_statement<R: Read>(reader: R, source: StatementSource) -> PennyResult<ImportedStatement> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let records = reader.records().map(|r| r.map_err(PennyError::from));
    collect_statement(&headers, records, source)
}

/// Parse the first worksheet of an Excel workbook
fn parse_workbook(path: &Path, source: StatementSource) -> PennyResult<ImportedStatement> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        PennyError::Import(format!("Failed to open workbook {}: {}", path.display(), e))
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| PennyError::Import(format!("Workbook {} has no sheets", path.display())))?
        .map_err(|e| PennyError::Import(format!("{}: {}", path.display(), e)))?;

    debug!(
        "Reading {} rows from first sheet of {}",
        range.height(),
        path.display()
    );
    parse_sheet_rows(range.rows(), source)
}

/// Parse worksheet rows, the first of which holds the headers
fn parse_sheet_rows<'a, I>(mut rows: I, source: StatementSource) -> PennyResult<ImportedStatement>
where
    I: Iterator<Item = &'a [Data]>,
{
    let headers: StringRecord = rows
        .next()
        .ok_or_else(|| PennyError::Import("Worksheet is empty".into()))?
        .iter()
        .map(cell_text)
        .collect();

    let records = rows.map(|row| Ok(row.iter().map(cell_text).collect::<StringRecord>()));
    collect_statement(&headers, records, source)
}

/// Render a cell the way the same value appears in a CSV export
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|d| d.format("%d.%m.%Y").to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string(),
    }
}

/// Normalize headers, parse every row and split by sign
fn collect_statement<I>(
    headers: &StringRecord,
    records: I,
    source: StatementSource,
) -> PennyResult<ImportedStatement>
where
    I: IntoIterator<Item = PennyResult<StringRecord>>,
{
    let columns: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, h)| (normalize_header(h), idx))
        .collect();

    for required in ["amount", "posting_date"] {
        if !columns.contains_key(required) {
            return Err(PennyError::Import(format!(
                "Statement is missing the '{}' column",
                required
            )));
        }
    }

    let source = source.to_string();
    let mut statement = ImportedStatement::default();

    for (idx, record) in records.into_iter().enumerate() {
        let record = record?;
        // Header is line 1
        let line = idx + 2;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let mut txn = parse_record(&record, &columns, &source)
            .map_err(|e| PennyError::Import(format!("line {}: {}", line, e)))?;

        if txn.amount > 0.0 {
            statement.income.push(txn);
        } else if txn.amount < 0.0 {
            txn.amount = txn.amount.abs();
            statement.expenses.push(txn);
        }
    }

    Ok(statement)
}

fn parse_record(
    record: &StringRecord,
    columns: &HashMap<String, usize>,
    source: &str,
) -> Result<Transaction, String> {
    let field = |name: &str| -> String {
        columns
            .get(name)
            .and_then(|&i| record.get(i))
            .unwrap_or("")
            .to_string()
    };

    let posting_date = Some(parse_finnish_date(&field("posting_date"))?);
    let payment_date = match field("payment_date") {
        s if s.is_empty() => None,
        s => Some(parse_finnish_date(&s)?),
    };

    Ok(Transaction {
        posting_date,
        payment_date,
        amount: clean_amount(&field("amount"))?,
        transaction_type: field("transaction_type"),
        payer: field("payer"),
        recipient_name: field("recipient_name"),
        recipient_account: field("recipient_account"),
        recipient_bic: field("recipient_bic"),
        reference_number: field("reference_number"),
        message: field("message"),
        archive_id: field("archive_id"),
        source: source.to_string(),
        category: None,
        auto_categorized: false,
    })
}

/// Summarize transactions by transaction type, sorted by type name
pub fn transaction_summary(transactions: &[Transaction]) -> Vec<TypeSummary> {
    let mut groups: BTreeMap<&str, TypeSummary> = BTreeMap::new();

    for txn in transactions {
        let entry = groups
            .entry(txn.transaction_type.as_str())
            .or_insert_with(|| TypeSummary {
                transaction_type: txn.transaction_type.clone(),
                count: 0,
                total: 0.0,
                first_posting: None,
                last_posting: None,
            });

        entry.count += 1;
        entry.total += txn.amount;
        if let Some(date) = txn.posting_date {
            entry.first_posting = Some(entry.first_posting.map_or(date, |d| d.min(date)));
            entry.last_posting = Some(entry.last_posting.map_or(date, |d| d.max(date)));
        }
    }

    groups
        .into_values()
        .map(|mut s| {
            s.total = (s.total * 100.0).round() / 100.0;
            s
        })
        .collect()
}
