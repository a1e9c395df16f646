//! Category display formatting
//!
//! Formats per-category spending totals and the active category mapping.

use std::collections::BTreeMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{CategoryMapping, Transaction};

use super::report::format_amount;

#[derive(Tabled)]
struct CategoryTotalRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
}

#[derive(Tabled)]
struct MappingRow {
    #[tabled(rename = "#")]
    priority: usize,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Keywords")]
    keywords: String,
}

/// Format spending per category for a set of categorized transactions
pub fn format_category_totals(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let mut totals: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for txn in transactions {
        let entry = totals.entry(txn.category_name()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += txn.amount;
    }

    let rows: Vec<CategoryTotalRow> = totals
        .into_iter()
        .map(|(category, (count, total))| CategoryTotalRow {
            category: if category.is_empty() {
                "(none)".to_string()
            } else {
                category.to_string()
            },
            count,
            total: format_amount(symbol, total),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format a category mapping in priority order
pub fn format_mapping(mapping: &CategoryMapping) -> String {
    if mapping.is_empty() {
        return "No categories configured.".to_string();
    }

    let rows: Vec<MappingRow> = mapping
        .rules()
        .iter()
        .enumerate()
        .map(|(i, rule)| MappingRow {
            priority: i + 1,
            category: rule.name.clone(),
            keywords: rule.keywords().join(", "),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
