use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;
use tracing::{info, warn};

use crate::handler::{client_json, validate_payload, JsonBody};
use crate::middlewares::identity::Identity;
use crate::model::user::User;
use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_users_handler(
    State(service): State<Arc<UserServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let users = service.list_users().await?;
    client_json(&users)
}

pub async fn admin_status_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let status = service.admin_status(&email).await?;
    Ok(Json(status))
}

// Register
pub async fn create_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    JsonBody(user): JsonBody<User>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&user)?;
    let outcome = service.register(user).await?;
    client_json(&outcome)
}

// Profile save on sign-in
pub async fn upsert_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    JsonBody(user): JsonBody<User>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&user)?;
    let outcome = service.save_profile(user).await?;
    client_json(&outcome)
}

// Make admin
pub async fn grant_admin_handler(
    identity: Identity,
    State(service): State<Arc<UserServiceImpl>>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let requester = match &identity {
        Identity::Verified(subject) => subject.as_str(),
        Identity::Absent => {
            warn!(target_email = %email, "Admin grant without credentials");
            return Err(HandlerError::forbidden("A verified identity token is required"));
        }
        Identity::Invalid(reason) => {
            warn!(target_email = %email, "Admin grant with rejected token");
            return Err(HandlerError::forbidden("A verified identity token is required")
                .with_details(reason.clone()));
        }
    };
    info!(requester = %requester, target_email = %email, "Admin grant requested");
    let outcome = service.grant_admin(requester, &email).await?;
    client_json(&outcome)
}
