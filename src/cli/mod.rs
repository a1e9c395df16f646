//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod categorize;
pub mod category;
pub mod config;
pub mod settle;

pub use categorize::{handle_categorize_command, CategorizeArgs};
pub use category::{handle_categories_command, CategoriesArgs};
pub use config::{handle_config_command, ConfigCommands};
pub use settle::{handle_settle_command, SettleArgs};

use std::path::PathBuf;

use crate::config::{PennyPaths, Settings};
use crate::error::PennyResult;
use crate::models::CategoryMapping;
use crate::services::load_mapping;

/// Resolve the category mapping for a command
///
/// An explicit `--mapping` path wins over the configured one. A missing file
/// falls back to the built-in mapping; a malformed one is an error.
pub(crate) fn resolve_mapping(
    explicit: Option<PathBuf>,
    settings: &Settings,
    paths: &PennyPaths,
) -> PennyResult<CategoryMapping> {
    let source = explicit.or_else(|| settings.mapping_source(paths));
    load_mapping(source.as_deref())
}
