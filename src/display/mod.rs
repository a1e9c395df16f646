//! Display formatting for terminal output
//!
//! Provides utilities for formatting categorized transactions, category
//! mappings and settlement reports for terminal display.

pub mod category;
pub mod report;
pub mod settlement;

pub use category::{format_category_totals, format_mapping};
pub use settlement::{format_settlement, format_shared_breakdown};
