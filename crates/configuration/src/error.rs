use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from the environment: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Failed to initialise logging: {0}")]
    LoggingError(String),
}
