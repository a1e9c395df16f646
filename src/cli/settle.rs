//! Settle CLI command
//!
//! Processes both persons' statements for the month and prints who owes whom.

use std::path::PathBuf;

use clap::Args;

use crate::config::{PennyPaths, Settings};
use crate::display::{format_settlement, format_shared_breakdown};
use crate::error::PennyResult;
use crate::export::export_settlement_json;
use crate::models::Person;
use crate::reports::SettlementReport;
use crate::services::{process_monthly_expenses, CategoryClassifier, StatementOwner};

/// Arguments for `pennywise settle`
#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Name of the first person
    #[arg(long)]
    pub name_a: String,

    /// Monthly income of the first person
    #[arg(long)]
    pub income_a: f64,

    /// Bank statement of the first person
    #[arg(long)]
    pub statement_a: PathBuf,

    /// Name of the second person
    #[arg(long)]
    pub name_b: String,

    /// Monthly income of the second person
    #[arg(long)]
    pub income_b: f64,

    /// Bank statement of the second person
    #[arg(long)]
    pub statement_b: PathBuf,

    /// Category mapping file (JSON or YAML)
    #[arg(short, long, env = "PENNYWISE_MAPPING")]
    pub mapping: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle the settle command
pub fn handle_settle_command(
    paths: &PennyPaths,
    settings: &Settings,
    args: SettleArgs,
) -> PennyResult<()> {
    let mapping = super::resolve_mapping(args.mapping, settings, paths)?;
    let classifier = CategoryClassifier::new(&mapping);

    let monthly = process_monthly_expenses(
        StatementOwner::new(Person::new(args.name_a, args.income_a), args.statement_a),
        StatementOwner::new(Person::new(args.name_b, args.income_b), args.statement_b),
        &classifier,
        &settings.description_field,
    )?;

    let symbol = &settings.currency_symbol;
    let report = SettlementReport::generate_with(&monthly.ledger, symbol, settings.balance_epsilon)?;

    if args.json {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        export_settlement_json(&mut handle, &report, true)?;
        println!();
    } else {
        println!("{}", format_settlement(&monthly.ledger, &report, symbol));
        println!("Shared expenses by category:");
        println!("{}", format_shared_breakdown(&monthly.ledger, symbol));
    }

    Ok(())
}
