//! Transaction model
//!
//! A normalized bank statement row. The core only reads the description and
//! writes `category` / `auto_categorized`; every other field passes through
//! to export untouched.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PennyError;

/// Where a transaction was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementSource {
    /// Imported from a bank statement file
    #[default]
    Csv,
    /// Entered by hand
    Manual,
}

impl fmt::Display for StatementSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Manual => write!(f, "Manual"),
        }
    }
}

impl FromStr for StatementSource {
    type Err = PennyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "manual" => Ok(Self::Manual),
            other => Err(PennyError::Validation(format!(
                "Unknown statement source '{}' (expected CSV or Manual)",
                other
            ))),
        }
    }
}

/// A normalized statement row, optionally categorized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Transaction {
    /// Date the bank booked the transaction
    #[serde(default)]
    pub posting_date: Option<NaiveDate>,

    /// Date the payment was made
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,

    /// Amount; expenses are stored as positive values
    pub amount: f64,

    #[serde(default)]
    pub transaction_type: String,

    #[serde(default)]
    pub payer: String,

    /// Counterparty name, the text classification runs on
    #[serde(default)]
    pub recipient_name: String,

    #[serde(default)]
    pub recipient_account: String,

    #[serde(default)]
    pub recipient_bic: String,

    #[serde(default)]
    pub reference_number: String,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub archive_id: String,

    /// Where the row came from ("CSV", "Manual")
    #[serde(default)]
    pub source: String,

    /// Assigned category, `None` until classified
    #[serde(default)]
    pub category: Option<String>,

    /// True when the category was machine-assigned
    #[serde(default)]
    pub auto_categorized: bool,
}

/// Column names accepted by [`Transaction::text_field`]
pub const TEXT_FIELDS: [&str; 6] = [
    "recipient_name",
    "description",
    "message",
    "payer",
    "transaction_type",
    "reference_number",
];

impl Transaction {
    /// Create a manual transaction with just a description and amount
    pub fn new(recipient_name: impl Into<String>, amount: f64) -> Self {
        Self {
            recipient_name: recipient_name.into(),
            amount,
            source: StatementSource::Manual.to_string(),
            ..Default::default()
        }
    }

    /// Text used for classification
    pub fn description(&self) -> &str {
        &self.recipient_name
    }

    /// Look up a text field by its column name
    ///
    /// Used when the classified column is configurable. Unknown names give `None`.
    pub fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "recipient_name" | "description" => Some(&self.recipient_name),
            "message" => Some(&self.message),
            "payer" => Some(&self.payer),
            "transaction_type" => Some(&self.transaction_type),
            "reference_number" => Some(&self.reference_number),
            _ => None,
        }
    }

    /// Whether the category was set by hand
    ///
    /// Manual categories are final; classification passes leave them alone.
    pub fn is_manually_categorized(&self) -> bool {
        self.category.is_some() && !self.auto_categorized
    }

    /// Category name, or an empty string when unclassified
    pub fn category_name(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new("LIDL HELSINKI", 12.5);
        assert_eq!(txn.description(), "LIDL HELSINKI");
        assert_eq!(txn.amount, 12.5);
        assert_eq!(txn.source, "Manual");
        assert!(txn.category.is_none());
        assert!(!txn.auto_categorized);
        assert!(!txn.is_manually_categorized());
    }

    #[test]
    fn test_manual_marker() {
        let mut txn = Transaction::new("NETFLIX", 9.99);
        txn.category = Some("entertainment".into());
        txn.auto_categorized = true;
        assert!(!txn.is_manually_categorized());

        txn.auto_categorized = false;
        assert!(txn.is_manually_categorized());
    }

    #[test]
    fn test_text_field() {
        let mut txn = Transaction::new("HSL", 3.0);
        txn.message = "monthly ticket".into();
        assert_eq!(txn.text_field("recipient_name"), Some("HSL"));
        assert_eq!(txn.text_field("message"), Some("monthly ticket"));
        assert_eq!(txn.text_field("nope"), None);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let txn: Transaction =
            serde_json::from_str(r#"{"amount": 4.2, "recipient_name": "HSL"}"#).unwrap();
        assert_eq!(txn.recipient_name, "HSL");
        assert!(txn.posting_date.is_none());
        assert_eq!(txn.category_name(), "");
    }

    #[test]
    fn test_statement_source_names() {
        assert_eq!(StatementSource::Csv.to_string(), "CSV");
        assert_eq!("manual".parse::<StatementSource>().unwrap(), StatementSource::Manual);
        assert_eq!(" CSV ".parse::<StatementSource>().unwrap(), StatementSource::Csv);
        assert!("excel".parse::<StatementSource>().unwrap_err().is_validation());
    }
}
