pub use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DbSettings, DEFAULT_DATABASE, DEFAULT_PORT};

/// Loads the database settings from the process environment.
///
/// Reads `DB_HOST`, `DB_NAME`, `DB_USER`, `DB_PASSWORD` and the optional
/// `DB_PORT`. Callers are expected to have loaded any `.env` file first.
/// Missing variables are not an error here: they come back empty and the
/// first connection attempt reports the problem.
pub fn load_settings() -> Result<DbSettings, ConfigError> {
    load_settings_from(config::Environment::with_prefix("DB"))
}

/// Builds settings from an explicit environment source.
pub fn load_settings_from(source: config::Environment) -> Result<DbSettings, ConfigError> {
    let builder = config::Config::builder().add_source(source).build()?;

    // Attempt to deserialize the environment into our `DbSettings` struct
    let settings = builder.try_deserialize::<DbSettings>()?;

    tracing::debug!(host = %settings.host, database = %settings.database_name(), "Loaded database settings.");
    Ok(settings)
}
