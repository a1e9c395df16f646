use anyhow::Result;
use clap::{Parser, Subcommand};

use pennywise::cli::{
    handle_categories_command, handle_categorize_command, handle_config_command,
    handle_settle_command, CategoriesArgs, CategorizeArgs, ConfigCommands, SettleArgs,
};
use pennywise::config::{PennyPaths, Settings};

#[derive(Parser)]
#[command(
    name = "pennywise",
    version,
    about = "Split shared household expenses in proportion to income",
    long_about = "PennyWise classifies bank statement transactions into spending \
                  categories and works out how two people should settle shared \
                  costs when each pays in proportion to their income."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the expenses of one bank statement
    Categorize(CategorizeArgs),

    /// Compute the monthly settlement for two persons
    Settle(SettleArgs),

    /// Show the active category mapping
    Categories(CategoriesArgs),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PENNYWISE_LOG", "warn"))
        .init();

    let cli = Cli::parse();

    let paths = PennyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Categorize(args)) => handle_categorize_command(&paths, &settings, args)?,
        Some(Commands::Settle(args)) => handle_settle_command(&paths, &settings, args)?,
        Some(Commands::Categories(args)) => handle_categories_command(&paths, &settings, args)?,
        Some(Commands::Config { command }) => handle_config_command(&paths, &settings, command)?,
        None => {
            println!("PennyWise - fair expense splitting for two");
            println!();
            println!("Run 'pennywise --help' for usage information.");
        }
    }

    Ok(())
}
