//! # ariary
//!
//! Spells ariary amounts in French from the command line.
//!
//! ## Usage
//! ```bash
//! # Bare phrase
//! ariary words 1234567
//! # un million deux cent trente-quatre mille cinq cent soixante-sept ariary
//!
//! # Receipt sentence
//! ariary receipt 200
//! # Arrêté à la somme de : deux cents ariary.
//!
//! # Email template variables
//! ariary --format json email 21000 --var customer_name=Rasoa
//! ```
//!
//! Exit status is 2 when any amount printed as "montant invalide".

use std::path::PathBuf;
use std::process::ExitCode;

use ariary_cli::logging;
use ariary_cli::output::{render_amounts, render_email, write_report, Phrase};
use ariary_cli::{CliConfig, OutputFormat};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "ariary")]
#[command(version)]
#[command(about = "Spell ariary amounts in French for receipts and emails")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (overrides config and ARIARY_FORMAT)
    #[arg(long, short = 'f', global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Config file (defaults to the per-user ariary.toml)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bare phrase for each amount
    Words {
        /// Amounts in ariary ("12 500", "21,7" accepted)
        #[arg(required = true, allow_hyphen_values = true)]
        amounts: Vec<String>,
    },

    /// Print the receipt sentence for each amount
    Receipt {
        /// Amounts in ariary
        #[arg(required = true, allow_hyphen_values = true)]
        amounts: Vec<String>,
    },

    /// Print email template variables for a sale total
    Email {
        /// Sale total in ariary
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Extra template variable, KEY=VALUE (repeatable)
        #[arg(long = "var", short = 'v')]
        vars: Vec<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Subscriber first: the config loader reports ignored overrides.
    let log_handle = logging::init();

    let config = CliConfig::resolve(cli.config.clone(), cli.format)?;
    logging::apply_filter(&log_handle, &config.logging.filter)?;

    info!(format = %config.output.format, "Configuration loaded");

    let format = config.output.format;
    let report = match &cli.command {
        Commands::Words { amounts } => render_amounts(amounts, Phrase::Words, format)?,
        Commands::Receipt { amounts } => render_amounts(amounts, Phrase::Receipt, format)?,
        Commands::Email { amount, vars } => render_email(amount, vars, format)?,
    };

    write_report(&report, std::io::stdout().lock())?;
    debug!(all_valid = report.all_valid, "Done");

    Ok(if report.all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
