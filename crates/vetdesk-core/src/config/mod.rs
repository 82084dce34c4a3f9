//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod auth;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::auth::AuthConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Authentication settings.
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Optional first-admin account, seeded at startup when the store is empty.
    #[serde(default)]
    pub bootstrap: Option<BootstrapAdmin>,
}

/// First-admin account seeded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapAdmin {
    /// First name.
    #[serde(default = "default_bootstrap_name")]
    pub name: String,
    /// Last name.
    #[serde(default = "default_bootstrap_lastname")]
    pub lastname: String,
    /// Email address.
    pub email: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: i64,
    /// Plaintext password, hashed before it is stored.
    pub password: String,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `VETDESK`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("VETDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn default_bootstrap_name() -> String {
    "Clinic".to_string()
}

fn default_bootstrap_lastname() -> String {
    "Admin".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}
