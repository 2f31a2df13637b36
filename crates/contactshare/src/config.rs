//! Application configuration loaded from environment variables.

use crate::identity::{IdentityFields, IdentityRecord};

/// Port used when `PORT` is unset.
const DEFAULT_PORT: u16 = 8080;

/// Configuration errors. Any of these aborts startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{0} is required in .env")]
    MissingField(&'static str),

    /// `PORT` is not a valid TCP port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// The contact details being published.
    pub identity: IdentityRecord,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `NAME`: Display name
    /// - `BASE_URL`: Canonical URL, encoded into the QR code
    ///
    /// Optional:
    /// - `EMAIL`, `PHONE`, `BLUESKY`, `GITHUB`, `WHATSAPP`, `FACEBOOK`
    /// - `PORT`: Listen port (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env_or_empty("PORT") {
            p if p.is_empty() => DEFAULT_PORT,
            p => p.parse::<u16>().map_err(|_| ConfigError::InvalidPort(p))?,
        };

        let identity = IdentityRecord::build(IdentityFields {
            name: env_or_empty("NAME"),
            base_url: env_or_empty("BASE_URL"),
            email: env_or_empty("EMAIL"),
            phone: env_or_empty("PHONE"),
            bluesky: env_or_empty("BLUESKY"),
            github: env_or_empty("GITHUB"),
            whatsapp: env_or_empty("WHATSAPP"),
            facebook: env_or_empty("FACEBOOK"),
        })?;

        let bind_addr = format!("0.0.0.0:{port}");

        tracing::info!(
            bind_addr = %bind_addr,
            name = %identity.name(),
            base_url = %identity.base_url(),
            optional_fields = identity.optional_field_count(),
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            identity,
        })
    }
}

fn env_or_empty(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}
