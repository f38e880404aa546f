use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Credentials and rules for verifying bearer identity tokens
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HS256 secret the identity issuer signs with
    pub jwt_secret: String,
    /// Lifetime of tokens minted by `issue_token`, in minutes
    pub token_expiration: i64,
    /// Clock skew tolerated on `exp`/`nbf`, in seconds
    pub leeway_secs: u64,
    /// Required `iss` claim (optional)
    pub jwt_issuer: Option<String>,
    /// Required `aud` claim (optional)
    pub jwt_audience: Option<String>,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    ///
    /// Expected environment variables:
    /// - JWT_SECRET: Secret key the tokens are signed with (required, at least 32 chars)
    /// - JWT_TOKEN_EXPIRY: Lifetime of issued tokens in minutes (defaults to 60)
    /// - JWT_LEEWAY_SECS: Allowed clock skew in seconds (defaults to 30)
    /// - JWT_ISSUER: JWT issuer (optional)
    /// - JWT_AUDIENCE: JWT audience (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading JWT configuration from environment variables");

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| {
            error!("JWT_SECRET environment variable not found");
            ConfigError::EnvVarNotFound("JWT_SECRET".to_string())
        })?;
        debug!("JWT secret loaded (length: {} chars)", jwt_secret.len());

        let token_expiration = env::var("JWT_TOKEN_EXPIRY")
            .unwrap_or_else(|_| {
                warn!("JWT_TOKEN_EXPIRY not set, using default: 60 minutes");
                "60".to_string()
            })
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidValue(format!("JWT_TOKEN_EXPIRY: {}", e)))?;

        let leeway_secs = env::var("JWT_LEEWAY_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidValue(format!("JWT_LEEWAY_SECS: {}", e)))?;
        debug!("JWT leeway: {} seconds", leeway_secs);

        let config = JwtConfig {
            jwt_secret,
            token_expiration,
            leeway_secs,
            jwt_issuer: env::var("JWT_ISSUER").ok(),
            jwt_audience: env::var("JWT_AUDIENCE").ok(),
        };
        config.validate()?;

        info!("JWT configuration loaded successfully");
        Ok(config)
    }

    /// Validate the JWT configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.len() < 32 {
            error!("JWT secret is too short (minimum 32 characters required)");
            return Err(ConfigError::ValidationError(
                "JWT secret must be at least 32 characters long".to_string(),
            ));
        }

        if self.token_expiration <= 0 {
            error!("Token expiration must be greater than 0");
            return Err(ConfigError::ValidationError(
                "Token expiration must be greater than 0".to_string(),
            ));
        }

        if matches!(self.jwt_issuer.as_deref(), Some("")) || matches!(self.jwt_audience.as_deref(), Some("")) {
            return Err(ConfigError::ValidationError(
                "JWT issuer/audience cannot be empty if set".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        JwtConfig {
            jwt_secret: "test_secret_key_for_jwt_testing_should_be_long_enough_for_security_purposes".to_string(),
            token_expiration: 60,
            leeway_secs: 30,
            jwt_issuer: Some("drone-shop-identity".to_string()),
            jwt_audience: Some("drone-shop".to_string()),
        }
    }
}
