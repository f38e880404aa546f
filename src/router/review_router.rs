use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handler::review_handler::{create_review_handler, list_reviews_handler};
use crate::service::review_service::ReviewServiceImpl;

pub fn review_router(service: Arc<ReviewServiceImpl>) -> Router {
    Router::new()
        .route("/reviews", get(list_reviews_handler).post(create_review_handler))
        .with_state(service)
}
