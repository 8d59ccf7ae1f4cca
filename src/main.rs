use clap::Parser;
use dotenvy::dotenv;
use stock_intake::{cli, errors::Result};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible); quiet by default so output stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file; env vars can also be set externally
    if dotenv().is_ok() {
        debug!("Loaded .env file.");
    }

    // 3. Parse arguments and run the selected command
    let output = cli::run(cli::Cli::parse()).inspect_err(|e| error!("Command failed: {e}"))?;

    println!("{output}");
    Ok(())
}
