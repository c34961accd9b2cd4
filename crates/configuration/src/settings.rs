use serde::Deserialize;
use std::fmt;

/// Database used by the bootstrapper when `DB_NAME` is not set.
pub const DEFAULT_DATABASE: &str = "new_database2";

/// The standard MySQL port.
pub const DEFAULT_PORT: u16 = 3306;

/// Connection settings, built once at startup and passed by reference to
/// whatever needs to open a connection.
#[derive(Clone, Deserialize)]
pub struct DbSettings {
    #[serde(default)]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// The `DB_NAME` variable.
    #[serde(default, rename = "name")]
    pub database: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl DbSettings {
    /// The database the application reads and writes.
    pub fn database_name(&self) -> &str {
        if self.database.trim().is_empty() {
            DEFAULT_DATABASE
        } else {
            self.database.trim()
        }
    }
}

impl fmt::Debug for DbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database_name())
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}
