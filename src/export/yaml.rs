//! YAML Export functionality
//!
//! Writes a category mapping as YAML, the human-editable form of the
//! classifier configuration.

use std::io::Write;

use crate::error::{PennyError, PennyResult};
use crate::models::CategoryMapping;

/// Export a category mapping, preserving priority order
pub fn export_mapping_yaml<W: Write>(writer: &mut W, mapping: &CategoryMapping) -> PennyResult<()> {
    writeln!(writer, "# PennyWise category mapping")
        .map_err(|e| PennyError::Export(e.to_string()))?;
    writeln!(writer, "# Categories are matched top to bottom; the first match wins.")
        .map_err(|e| PennyError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, mapping).map_err(|e| PennyError::Export(e.to_string()))?;

    Ok(())
}
