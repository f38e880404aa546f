use std::env;
use std::net::{IpAddr, SocketAddr};
use tracing::{debug, info, warn};

use crate::config::ConfigError;

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for request bodies, multipart uploads included
    pub max_upload_bytes: usize,
}

impl AppConfig {
    /// Load the listener configuration from environment variables
    ///
    /// Expected environment variables:
    /// - APP_HOST: interface to bind (defaults to 0.0.0.0)
    /// - APP_PORT, or PORT when APP_PORT is unset: listening port (defaults to 5000)
    /// - MAX_UPLOAD_BYTES: request body limit in bytes (defaults to 10 MiB)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading application configuration from environment variables");

        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        debug!("Application host: {}", host);

        let port = match env::var("APP_PORT").or_else(|_| env::var("PORT")) {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue(format!("Invalid port value: {}", raw)))?,
            Err(_) => {
                warn!("APP_PORT/PORT not set, using default: 5000");
                5000
            }
        };
        debug!("Application port: {}", port);

        let max_upload_bytes = match env::var("MAX_UPLOAD_BYTES") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue("Invalid MAX_UPLOAD_BYTES value".to_string()))?,
            Err(_) => Self::default().max_upload_bytes,
        };

        let config = AppConfig { host, port, max_upload_bytes };
        config.validate()?;
        info!("Application configuration loaded successfully");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(ConfigError::ValidationError(format!("APP_HOST is not an IP address: {}", self.host)));
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::ValidationError("MAX_UPLOAD_BYTES must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Socket address to bind; `validate` guarantees the host parses
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidValue(format!("Invalid host: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}
