//! Category classifier
//!
//! Assigns spending categories to transactions by case-insensitive keyword
//! matching against an ordered [`CategoryMapping`]. The first category in
//! declaration order with a matching keyword wins, regardless of which
//! keyword is longer or more specific.

use std::path::Path;

use log::{debug, trace};

use crate::error::{PennyError, PennyResult};
use crate::models::{CategoryMapping, Transaction, TEXT_FIELDS, UNCATEGORIZED};

const DESCRIPTION_FIELD: &str = "recipient_name";

/// Load a category mapping from a JSON or YAML file, or fall back to the
/// built-in default when no source is given or the file does not exist.
///
/// A file that exists but cannot be read or parsed into the category ->
/// keyword-list shape is a `ConfigLoad` error; the default is not substituted.
pub fn load_mapping(source: Option<&Path>) -> PennyResult<CategoryMapping> {
    let path = match source {
        Some(path) if path.exists() => path,
        Some(path) => {
            debug!(
                "Category mapping {} not found, using built-in default",
                path.display()
            );
            return Ok(CategoryMapping::default());
        }
        None => return Ok(CategoryMapping::default()),
    };

    let contents = std::fs::read_to_string(path)
        .map_err(|e| PennyError::ConfigLoad(format!("{}: {}", path.display(), e)))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    let mapping: CategoryMapping = if is_yaml {
        serde_yaml::from_str(&contents)
            .map_err(|e| PennyError::ConfigLoad(format!("{}: {}", path.display(), e)))?
    } else {
        serde_json::from_str(&contents)
            .map_err(|e| PennyError::ConfigLoad(format!("{}: {}", path.display(), e)))?
    };

    debug!(
        "Loaded {} categories from {}",
        mapping.len(),
        path.display()
    );
    Ok(mapping)
}

/// Classifies transaction descriptions with an injected mapping
pub struct CategoryClassifier<'a> {
    mapping: &'a CategoryMapping,
}

impl<'a> CategoryClassifier<'a> {
    /// Create a classifier over a mapping
    pub fn new(mapping: &'a CategoryMapping) -> Self {
        Self { mapping }
    }

    /// The mapping this classifier uses
    pub fn mapping(&self) -> &CategoryMapping {
        self.mapping
    }

    /// Classify a description, returning `"uncategorized"` when nothing matches
    ///
    /// `_amount` is accepted for call-site compatibility with amount-aware
    /// rules but does not affect the result.
    pub fn classify(&self, description: &str, _amount: f64) -> String {
        let upper = description.to_uppercase();

        for rule in self.mapping.rules() {
            if let Some(keyword) = rule.matching_keyword(&upper) {
                trace!("'{}' matched '{}' -> {}", description, keyword, rule.name);
                return rule.name.clone();
            }
        }

        UNCATEGORIZED.to_string()
    }

    /// Classify a single transaction in place on its description
    ///
    /// Manually categorized transactions are left untouched.
    pub fn classify_transaction(&self, transaction: &mut Transaction) {
        if transaction.is_manually_categorized() {
            return;
        }
        let category = self.classify(transaction.description(), transaction.amount);
        transaction.category = Some(category);
        transaction.auto_categorized = true;
    }

    /// Classify every transaction on its description, returning a
    /// categorized copy in the same order
    pub fn classify_batch(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let mut result = transactions.to_vec();
        for txn in &mut result {
            self.classify_transaction(txn);
        }
        log_batch(&result, DESCRIPTION_FIELD);
        result
    }

    /// Classify every transaction on the named text field
    ///
    /// A field name [`Transaction::text_field`] does not know is a
    /// `Validation` error; nothing is classified.
    pub fn classify_batch_by(
        &self,
        transactions: &[Transaction],
        field: &str,
    ) -> PennyResult<Vec<Transaction>> {
        validate_text_field(field)?;

        let mut result = transactions.to_vec();
        for txn in &mut result {
            if txn.is_manually_categorized() {
                continue;
            }
            let category = self.classify(txn.text_field(field).unwrap_or_default(), txn.amount);
            txn.category = Some(category);
            txn.auto_categorized = true;
        }
        log_batch(&result, field);
        Ok(result)
    }
}

/// Check that `field` names a transaction text column
pub fn validate_text_field(field: &str) -> PennyResult<()> {
    if TEXT_FIELDS.contains(&field) {
        Ok(())
    } else {
        Err(PennyError::Validation(format!(
            "Unknown description field '{}' (expected one of: {})",
            field,
            TEXT_FIELDS.join(", ")
        )))
    }
}

fn log_batch(transactions: &[Transaction], field: &str) {
    let uncategorized = transactions
        .iter()
        .filter(|t| t.category.as_deref() == Some(UNCATEGORIZED))
        .count();
    debug!(
        "Classified {} transactions on '{}' ({} uncategorized)",
        transactions.len(),
        field,
        uncategorized
    );
}

/// Manually set the category of the transaction at `index`
///
/// Always clears `auto_categorized`, whatever it was before; the record is
/// then skipped by later classification passes.
pub fn override_category(
    transactions: &mut [Transaction],
    index: usize,
    new_category: impl Into<String>,
) -> PennyResult<()> {
    let txn = transactions
        .get_mut(index)
        .ok_or_else(|| PennyError::transaction_not_found(index.to_string()))?;

    let new_category = new_category.into();
    debug!(
        "Override #{} '{}': {} -> {}",
        index,
        txn.description(),
        txn.category_name(),
        new_category
    );
    txn.category = Some(new_category);
    txn.auto_categorized = false;
    Ok(())
}
