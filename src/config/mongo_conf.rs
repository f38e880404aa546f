use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::config::ConfigError;

const DEFAULT_DATABASE: &str = "Drone_Shop";

/// Connection settings for the shop's document store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    /// Database holding the Users, Drones, Orders, Reviews and cart collections
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Upper bound of pooled connections on the single shared client
    pub pool_size: u32,
    pub connection_timeout_secs: u64,
}

/// Parse `name` when set, otherwise fall back to `default`
fn numeric_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue(format!("{} is not a valid number: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

impl MongoConfig {
    /// Load the store settings from the environment.
    ///
    /// `MONGO_URI` is required. `MONGO_DATABASE`, `MONGO_POOL_SIZE` and
    /// `MONGO_CONNECTION_TIMEOUT` fall back to the defaults;
    /// `MONGO_USERNAME`/`MONGO_PASSWORD` are only used as a pair.
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading MongoDB configuration from environment variables");
        let defaults = Self::default();

        let uri = env::var("MONGO_URI").map_err(|_| ConfigError::EnvVarNotFound("MONGO_URI".to_string()))?;
        let database = env::var("MONGO_DATABASE").unwrap_or_else(|_| {
            warn!("MONGO_DATABASE not set, using default: {}", DEFAULT_DATABASE);
            DEFAULT_DATABASE.to_string()
        });

        let config = MongoConfig {
            uri,
            database,
            username: env::var("MONGO_USERNAME").ok(),
            password: env::var("MONGO_PASSWORD").ok(),
            pool_size: numeric_var("MONGO_POOL_SIZE", defaults.pool_size)?,
            connection_timeout_secs: numeric_var("MONGO_CONNECTION_TIMEOUT", defaults.connection_timeout_secs)?,
        };
        debug!(
            database = %config.database,
            pool_size = config.pool_size,
            timeout_secs = config.connection_timeout_secs,
            authenticated = config.username.is_some(),
            "MongoDB settings"
        );

        config.validate()?;
        Ok(config)
    }

    /// Local settings for the ignored live-database tests
    pub fn from_test_env() -> Self {
        MongoConfig {
            database: "drone_shop_test".to_string(),
            pool_size: 2,
            connection_timeout_secs: 2,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::ValidationError(msg.to_string()));
        if self.uri.trim().is_empty() {
            return invalid("MONGO_URI cannot be empty");
        }
        if self.database.trim().is_empty() {
            return invalid("MONGO_DATABASE cannot be empty");
        }
        if self.pool_size == 0 || self.connection_timeout_secs == 0 {
            return invalid("MONGO_POOL_SIZE and MONGO_CONNECTION_TIMEOUT must be greater than 0");
        }
        match (self.username.as_deref(), self.password.as_deref()) {
            (None, None) => Ok(()),
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => Ok(()),
            _ => invalid("MONGO_USERNAME and MONGO_PASSWORD must both be set and non-empty"),
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: DEFAULT_DATABASE.to_string(),
            username: None,
            password: None,
            pool_size: 10,
            connection_timeout_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_shop_database() {
        let config = MongoConfig::default();
        assert_eq!(config.database, "Drone_Shop");
        assert_eq!(config.pool_size, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_limits_rejected() {
        let mut config = MongoConfig::from_test_env();
        config.pool_size = 0;
        assert!(config.validate().is_err());

        let mut config = MongoConfig::from_test_env();
        config.connection_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_uri_rejected() {
        let mut config = MongoConfig::from_test_env();
        config.uri = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_credentials_come_in_pairs() {
        let mut config = MongoConfig::from_test_env();
        config.username = Some("shop".to_string());
        assert!(config.validate().is_err());
        config.password = Some(String::new());
        assert!(config.validate().is_err());
        config.password = Some("secret".to_string());
        assert!(config.validate().is_ok());
    }
}
