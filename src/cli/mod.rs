//! Command-line presentation layer.
//!
//! Stands in for the intake form: supplier tabs become `suppliers`, the
//! stock-entry table becomes `record`, the result tables and chart become
//! `averages`. All state is explicit: commands receive an [`AppContext`] and
//! their arguments, and return the text to print.

/// Command implementations (general, intake, analytics, history)
pub mod commands;

use crate::{
    config::{self, AppConfig},
    entities::Roster,
    errors::Result,
    store::SubmissionLog,
};
use clap::{Parser, Subcommand};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

/// Shared data available to every command.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Providers and products offered by the form
    pub roster: Roster,
    /// Persisted submission history
    pub log: SubmissionLog,
}

impl AppContext {
    /// Builds the context from resolved configuration.
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        Self {
            roster: config.roster,
            log: SubmissionLog::new(config.data_path),
        }
    }
}

/// Record stock counts per supplier and review average sales.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Roster file (TOML). Defaults to $STOCK_INTAKE_CONFIG or ./config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Submission log file (JSON). Defaults to $STOCK_INTAKE_DATA.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List suppliers and their products.
    Suppliers,
    /// Save one stock reading for every product of a supplier.
    Record(commands::intake::RecordArgs),
    /// Show average units sold per product and per supplier.
    Averages(commands::analytics::AveragesArgs),
    /// List every stored submission.
    History(commands::history::HistoryArgs),
    /// Delete the whole submission history.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Resolves configuration and runs one command, returning its output.
///
/// # Errors
/// Returns an error if configuration cannot be loaded or the command fails.
pub fn run(cli: Cli) -> Result<String> {
    let app_config = config::load_app_config(cli.config.as_deref(), cli.data.as_deref())?;
    let ctx = AppContext::from_config(app_config);

    match cli.command {
        Commands::Suppliers => Ok(commands::general::suppliers(&ctx)),
        Commands::Record(args) => commands::intake::record(&ctx, &args),
        Commands::Averages(args) => commands::analytics::averages(&ctx, &args),
        Commands::History(args) => commands::history::history(&ctx, &args),
        Commands::Reset { yes } => {
            let confirmed = yes || confirm_reset(&ctx)?;
            commands::history::reset(&ctx, confirmed)
        }
    }
}

/// Asks the operator on the terminal before wiping history.
fn confirm_reset(ctx: &AppContext) -> Result<bool> {
    let count = ctx.log.read_all().len();
    let mut stdout = io::stdout();
    write!(
        stdout,
        "Se borrarán {count} registros guardados. Esta acción no se puede deshacer. ¿Continuar? [s/N] "
    )?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}
