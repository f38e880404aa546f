use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::config::JwtConfig;

/// Identity token claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (issuer-side user id)
    pub sub: String,
    /// Verified email, used as the request subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

/// Error types for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("Failed to encode JWT token: {0}")]
    EncodingFailed(String),
    #[error("Failed to decode JWT token: {0}")]
    DecodingFailed(String),
    #[error("Token has expired")]
    TokenExpired,
    #[error("Invalid token format")]
    InvalidToken,
    #[error("Token carries no email claim")]
    MissingEmail,
}

/// Opaque bearer-token verification
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify `token` and return the subject email it vouches for
    async fn verify(&self, token: &str) -> Result<String, JwtError>;
}

/// Pull the token out of an `Authorization: Bearer <token>` value
pub fn extract_bearer_token(auth_header: &str) -> Result<&str, JwtError> {
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        debug!("Authorization header is not a Bearer credential");
        JwtError::InvalidToken
    })?;
    let token = token.trim();
    if token.is_empty() {
        return Err(JwtError::InvalidToken);
    }
    Ok(token)
}

#[derive(Debug, Clone)]
pub struct JwtTokenVerifier {
    pub jwt_config: JwtConfig,
}

impl JwtTokenVerifier {
    pub fn new(jwt_config: JwtConfig) -> Self {
        JwtTokenVerifier { jwt_config }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.jwt_config.leeway_secs;
        match &self.jwt_config.jwt_issuer {
            Some(issuer) => validation.set_issuer(&[issuer]),
            None => validation.iss = None,
        }
        match &self.jwt_config.jwt_audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }
        validation
    }

    /// Decode and check signature, expiry, issuer and audience
    pub fn decode_claims(&self, token: &str) -> Result<Claims, JwtError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_config.jwt_secret.as_bytes());
        match decode::<Claims>(token, &decoding_key, &self.validation()) {
            Ok(data) => Ok(data.claims),
            Err(err) => match err.kind() {
                ErrorKind::ExpiredSignature => {
                    warn!("Rejected expired identity token");
                    Err(JwtError::TokenExpired)
                }
                _ => {
                    debug!("Failed to decode identity token: {}", err);
                    Err(JwtError::DecodingFailed(err.to_string()))
                }
            },
        }
    }

    /// Mint a token for `email` with the configured issuer, audience and lifetime
    pub fn issue_token(&self, user_id: &str, email: &str) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: Some(email.to_string()),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.jwt_config.token_expiration)).timestamp(),
            iss: self.jwt_config.jwt_issuer.clone(),
            aud: self.jwt_config.jwt_audience.clone(),
            jti: Uuid::new_v4().to_string(),
        };
        let encoding_key = EncodingKey::from_secret(self.jwt_config.jwt_secret.as_bytes());
        encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|err| {
            error!("Failed to encode JWT token: {}", err);
            JwtError::EncodingFailed(err.to_string())
        })
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn verify(&self, token: &str) -> Result<String, JwtError> {
        let claims = self.decode_claims(token)?;
        match claims.email {
            Some(email) if !email.is_empty() => {
                info!(subject = %email, "Identity token verified");
                Ok(email)
            }
            _ => Err(JwtError::MissingEmail),
        }
    }
}
