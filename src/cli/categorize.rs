//! Categorize CLI command
//!
//! Imports one statement, classifies its expenses, applies manual overrides
//! and optionally saves the result.

use std::path::PathBuf;

use clap::Args;

use crate::config::{PennyPaths, Settings};
use crate::display::format_category_totals;
use crate::display::report::format_amount;
use crate::error::{PennyError, PennyResult};
use crate::export::{save_categorized, ExportFormat};
use crate::models::StatementSource;
use crate::services::{
    import_bank_report, override_category, transaction_summary, CategoryClassifier,
};

/// Arguments for `pennywise categorize`
#[derive(Args, Debug)]
pub struct CategorizeArgs {
    /// Bank statement (semicolon-separated CSV, .xlsx or .xls)
    pub statement: PathBuf,

    /// Write categorized expenses to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: csv or json (defaults to the configured format)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Category mapping file (JSON or YAML)
    #[arg(short, long, env = "PENNYWISE_MAPPING")]
    pub mapping: Option<PathBuf>,

    /// Source tag for the imported rows: CSV or Manual
    #[arg(long, default_value = "CSV")]
    pub source: StatementSource,

    /// Manually set a category, as INDEX=CATEGORY (repeatable)
    #[arg(long = "set", value_name = "INDEX=CATEGORY")]
    pub overrides: Vec<String>,
}

/// Parse an `INDEX=CATEGORY` override
fn parse_override(s: &str) -> PennyResult<(usize, String)> {
    let (index, category) = s.split_once('=').ok_or_else(|| {
        PennyError::Validation(format!("Override '{}' must look like INDEX=CATEGORY", s))
    })?;

    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| PennyError::Validation(format!("Invalid override index: '{}'", index)))?;

    let category = category.trim();
    if category.is_empty() {
        return Err(PennyError::Validation(format!(
            "Override '{}' has an empty category",
            s
        )));
    }

    Ok((index, category.to_string()))
}

/// Handle the categorize command
pub fn handle_categorize_command(
    paths: &PennyPaths,
    settings: &Settings,
    args: CategorizeArgs,
) -> PennyResult<()> {
    // Validate the format before doing any work
    let format: ExportFormat = args
        .format
        .as_deref()
        .unwrap_or(settings.default_export_format.as_str())
        .parse()?;
    let overrides = args
        .overrides
        .iter()
        .map(|s| parse_override(s))
        .collect::<PennyResult<Vec<_>>>()?;

    let mapping = super::resolve_mapping(args.mapping, settings, paths)?;
    let classifier = CategoryClassifier::new(&mapping);

    let statement = import_bank_report(&args.statement, args.source)?;
    let mut expenses =
        classifier.classify_batch_by(&statement.expenses, &settings.description_field)?;

    for (index, category) in overrides {
        override_category(&mut expenses, index, category)?;
    }

    println!(
        "Categorized {} expenses from {}",
        expenses.len(),
        args.statement.display()
    );
    println!();
    println!("{}", format_category_totals(&expenses, &settings.currency_symbol));

    println!();
    println!("By transaction type:");
    for summary in transaction_summary(&expenses) {
        let span = match (summary.first_posting, summary.last_posting) {
            (Some(first), Some(last)) => format!(" ({} .. {})", first, last),
            _ => String::new(),
        };
        println!(
            "  {:<20} {:>4} {:>12}{}",
            summary.transaction_type,
            summary.count,
            format_amount(&settings.currency_symbol, summary.total),
            span
        );
    }

    if let Some(output) = args.output {
        save_categorized(&output, &expenses, format)?;
        println!();
        println!("Saved to: {}", output.display());
    }

    Ok(())
}
