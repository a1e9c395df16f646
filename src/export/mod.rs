//! Export module for PennyWise
//!
//! Writes categorized transactions and settlement reports:
//! - CSV: spreadsheet-compatible transaction listing
//! - JSON: machine-readable transactions and settlement reports
//! - YAML: human-readable category mappings

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use log::info;

use crate::error::{PennyError, PennyResult};
use crate::models::Transaction;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_settlement_json, export_transactions_json};
pub use self::yaml::export_mapping_yaml;

/// Formats categorized transactions can be saved in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = PennyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(PennyError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Save categorized transactions to `path` in the given format
pub fn save_categorized(
    path: &Path,
    transactions: &[Transaction],
    format: ExportFormat,
) -> PennyResult<()> {
    let file = File::create(path).map_err(|e| {
        PennyError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_transactions_csv(&mut writer, transactions)?,
        ExportFormat::Json => export_transactions_json(&mut writer, transactions, true)?,
    }

    writer
        .flush()
        .map_err(|e| PennyError::Export(e.to_string()))?;

    info!(
        "Saved {} transactions to {} ({})",
        transactions.len(),
        path.display(),
        format
    );
    Ok(())
}
