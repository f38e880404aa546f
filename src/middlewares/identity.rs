use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::{header::AUTHORIZATION, request::Parts};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, warn};

use crate::util::jwt::{extract_bearer_token, TokenVerifier};

/// Outcome of looking at the request's bearer credential.
///
/// Never rejects by itself; each route decides what the variants mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// Token verified; holds the subject email
    Verified(String),
    /// No `Authorization: Bearer` credential on the request
    Absent,
    /// A bearer token was sent but failed verification
    Invalid(String),
}

impl Identity {
    pub fn subject(&self) -> Option<&str> {
        match self {
            Identity::Verified(subject) => Some(subject),
            Identity::Absent | Identity::Invalid(_) => None,
        }
    }
}

pub async fn classify(verifier: &dyn TokenVerifier, auth_header: Option<&str>) -> Identity {
    let Some(header) = auth_header else {
        return Identity::Absent;
    };
    if !header.starts_with("Bearer ") {
        debug!("Authorization header without Bearer scheme ignored");
        return Identity::Absent;
    }
    let token = match extract_bearer_token(header) {
        Ok(token) => token,
        Err(e) => return Identity::Invalid(e.to_string()),
    };
    match verifier.verify(token).await {
        Ok(subject) => Identity::Verified(subject),
        Err(e) => {
            warn!("Bearer token rejected: {}", e);
            Identity::Invalid(e.to_string())
        }
    }
}

/// Attach an [`Identity`] to the request extensions
pub async fn identify(
    State(verifier): State<Arc<dyn TokenVerifier>>,
    mut req: Request,
    next: Next,
) -> Response {
    // Owned copy: the request body is not Sync, so no borrow of `req` may live across the await
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map(str::to_owned));
    let identity = match header {
        None => Identity::Absent,
        Some(Ok(header)) => classify(verifier.as_ref(), Some(&header)).await,
        Some(Err(_)) => Identity::Invalid("Authorization header is not valid ASCII".to_string()),
    };
    req.extensions_mut().insert(identity);
    next.run(req).await
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Identity>()
            .cloned()
            .unwrap_or(Identity::Absent))
    }
}
