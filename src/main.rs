use anyhow::Context;
use configuration::logging;
use console::{Menu, Prompter};
use database::{ensure_schema, ConnectionProvider, CustomerRepository};
use std::io;

/// The main entry point for the Customer Desk console.
///
/// Everything runs on one thread: the console blocks on input and each
/// database call blocks until its statement finishes.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if there is one.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: could not read .env file: {e}");
        }
    }

    // Logging is best effort; the menu works without it.
    let _log_guard = match logging::init(&logging::log_directory()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e}");
            None
        }
    };

    let settings = configuration::load_settings().context("Failed to load database settings")?;
    let provider = ConnectionProvider::new(&settings);

    // A server we cannot reach at all is fatal; a failed DDL statement is
    // reported and the menu still starts.
    match ensure_schema(&provider).await {
        Ok(()) => println!("Database and table are set up successfully."),
        Err(e) if e.is_connection() => {
            tracing::error!(error = ?e, "Bootstrap could not reach the database.");
            return Err(e).context("Error ensuring database and tables");
        }
        Err(e) => {
            tracing::error!(error = ?e, "Schema bootstrap failed.");
            println!("Error ensuring database and tables: {e}");
        }
    }

    let repository = CustomerRepository::new(provider);
    let prompter = Prompter::new(io::stdin().lock(), io::stdout());
    Menu::new(&repository, prompter)
        .run()
        .await
        .context("Console failure")?;

    tracing::info!("Session ended.");
    Ok(())
}
