use std::env;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}

/// Process settings. A missing `mongo_uri` is not an error here: the server
/// still starts and reports the store as unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mongo_uri: Option<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mongo_uri = lookup("MONGO_URI").filter(|v| !v.trim().is_empty());
        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { mongo_uri, port })
    }
}
