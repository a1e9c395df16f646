//! Category CLI commands
//!
//! Shows the active category mapping in priority order.

use std::path::PathBuf;

use clap::Args;

use crate::config::{PennyPaths, Settings};
use crate::display::format_mapping;
use crate::error::PennyResult;
use crate::export::export_mapping_yaml;

/// Arguments for `pennywise categories`
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Category mapping file (JSON or YAML)
    #[arg(short, long, env = "PENNYWISE_MAPPING")]
    pub mapping: Option<PathBuf>,

    /// Print the mapping as YAML instead of a table
    #[arg(long)]
    pub yaml: bool,
}

/// Handle the categories command
pub fn handle_categories_command(
    paths: &PennyPaths,
    settings: &Settings,
    args: CategoriesArgs,
) -> PennyResult<()> {
    let mapping = super::resolve_mapping(args.mapping, settings, paths)?;

    if args.yaml {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        export_mapping_yaml(&mut handle, &mapping)?;
    } else {
        println!("{}", format_mapping(&mapping));
        println!();
        println!("Descriptions matching no keyword are 'uncategorized'.");
    }

    Ok(())
}
