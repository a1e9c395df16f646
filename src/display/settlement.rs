//! Settlement display formatting
//!
//! Renders the monthly balance sheet: the per-person table, the shared
//! spending breakdown and the closing summary line.

use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::SettlementReport;
use crate::services::{ExpenseLedger, FairShareCalculator};

use super::report::{double_separator, format_amount, format_header, format_percentage};

const WIDTH: usize = 48;

#[derive(Tabled)]
struct PersonRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Income share")]
    ratio: String,
    #[tabled(rename = "Fair share")]
    fair_share: String,
    #[tabled(rename = "Actually paid")]
    actual_paid: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format a settlement report as a balance sheet
pub fn format_settlement(
    ledger: &ExpenseLedger,
    report: &SettlementReport,
    symbol: &str,
) -> String {
    let (ratio_a, ratio_b) =
        FairShareCalculator::income_ratio(ledger.person_a(), ledger.person_b());

    let rows: Vec<PersonRow> = [(&report.person_a, ratio_a), (&report.person_b, ratio_b)]
        .into_iter()
        .map(|(p, ratio)| PersonRow {
            name: p.name.clone(),
            ratio: format_percentage(ratio),
            fair_share: format_amount(symbol, p.fair_share),
            actual_paid: format_amount(symbol, p.actual_paid),
            balance: format_amount(symbol, p.balance),
        })
        .collect();

    let mut output = String::new();
    output.push_str(&format_header("Monthly Balance Sheet", WIDTH));
    output.push('\n');
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total shared expenses: {}\n\n",
        format_amount(symbol, report.total_shared_expenses)
    ));
    output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    output.push_str(&format!("\n\nSummary: {}\n", report.summary));
    output
}

/// Format shared spending per category, split by payer
pub fn format_shared_breakdown(ledger: &ExpenseLedger, symbol: &str) -> String {
    if ledger.shared_expenses().is_empty() {
        return "No shared expenses recorded.".to_string();
    }

    let a = ledger.person_a();
    let b = ledger.person_b();
    let paid = |map: &std::collections::BTreeMap<String, f64>, category: &str| {
        format_amount(symbol, map.get(category).copied().unwrap_or(0.0))
    };

    // Payer columns are titled with the persons' names, so build rows by hand
    let mut builder = Builder::default();
    builder.push_record([
        "Category".to_string(),
        a.name.clone(),
        b.name.clone(),
        "Total".to_string(),
    ]);
    for (category, total) in ledger.shared_expenses() {
        builder.push_record([
            category.clone(),
            paid(&a.shared_expenses_paid, category),
            paid(&b.shared_expenses_paid, category),
            format_amount(symbol, *total),
        ]);
    }

    builder.build().with(Style::rounded()).to_string()
}
