use std::sync::Arc;

use axum::{middleware, routing::{get, put}, Router};

use crate::handler::user_handler::{
    admin_status_handler,
    create_user_handler,
    grant_admin_handler,
    list_users_handler,
    upsert_user_handler,
};
use crate::middlewares::identity::identify;
use crate::service::user_service::UserServiceImpl;
use crate::util::jwt::TokenVerifier;

pub fn user_router(service: Arc<UserServiceImpl>, verifier: Arc<dyn TokenVerifier>) -> Router {
    // Only the admin grant looks at bearer tokens
    let grant_admin = put(grant_admin_handler)
        .route_layer(middleware::from_fn_with_state(verifier, identify));

    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler).put(upsert_user_handler))
        .route("/users/{email}", get(admin_status_handler).merge(grant_admin))
        .with_state(service)
}
