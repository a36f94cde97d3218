use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use currency_converter::SettingsCommand;
use currency_converter::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Fetch the latest exchange rates
    Sync,
    /// Convert an amount using the cached rates
    Convert {
        /// Amount to convert
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Currency code to convert from, e.g. AUD
        from: String,
        /// Currency code to convert to, e.g. USD
        to: String,
    },
    /// Display cached rates for the allowed currencies
    Rates,
    /// Manage the API key and allowed currencies
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Display current settings
    Show,
    /// Store the freecurrencyapi.com API key
    SetKey { key: String },
    /// Append currencies to the allowed list
    Add {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Remove a currency from the allowed list
    Remove { code: String },
    /// Move a currency to a position in the allowed list, starting at 0
    Move { code: String, position: usize },
}

impl From<SettingsCommands> for SettingsCommand {
    fn from(cmd: SettingsCommands) -> SettingsCommand {
        match cmd {
            SettingsCommands::Show => SettingsCommand::Show,
            SettingsCommands::SetKey { key } => SettingsCommand::SetKey(key),
            SettingsCommands::Add { codes } => SettingsCommand::Add(codes),
            SettingsCommands::Remove { code } => SettingsCommand::Remove(code),
            SettingsCommands::Move { code, position } => SettingsCommand::Move { code, position },
        }
    }
}

impl From<Commands> for currency_converter::AppCommand {
    fn from(cmd: Commands) -> currency_converter::AppCommand {
        match cmd {
            Commands::Sync => currency_converter::AppCommand::Sync,
            Commands::Convert { amount, from, to } => {
                currency_converter::AppCommand::Convert { amount, from, to }
            }
            Commands::Rates => currency_converter::AppCommand::Rates,
            Commands::Settings { command } => {
                currency_converter::AppCommand::Settings(command.into())
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => currency_converter::cli::setup::setup(),
        Some(cmd) => currency_converter::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
