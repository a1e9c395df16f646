//! Config CLI commands
//!
//! Shows the active configuration and updates single settings.

use clap::Subcommand;
use log::info;

use crate::config::{PennyPaths, Settings};
use crate::error::PennyResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,

    /// Change a setting and save it
    Set {
        /// Setting name (currency_symbol, balance_epsilon, default_export_format,
        /// category_file, description_field)
        key: String,

        /// New value; an empty category_file clears it
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// Handle the config command
pub fn handle_config_command(
    paths: &PennyPaths,
    settings: &Settings,
    cmd: Option<ConfigCommands>,
) -> PennyResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => print_config(paths, settings),
        ConfigCommands::Set { key, value } => {
            let mut updated = settings.clone();
            updated.set(&key, &value)?;
            updated.save(paths)?;
            info!("Updated setting {} in {}", key, paths.settings_file().display());
            println!("Set {} = {}", key, value);
        }
    }

    Ok(())
}

fn print_config(paths: &PennyPaths, settings: &Settings) {
    println!("PennyWise Configuration");
    println!("=======================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    match settings.mapping_source(paths) {
        Some(source) => println!("Category mapping: {}", source.display()),
        None => println!("Category mapping: built-in default"),
    }
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Balance epsilon:   {}", settings.balance_epsilon);
    println!("  Export format:     {}", settings.default_export_format);
    println!("  Description field: {}", settings.description_field);
}
