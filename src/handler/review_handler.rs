use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;

use crate::handler::{client_json, JsonBody};
use crate::model::review::Review;
use crate::service::review_service::{ReviewService, ReviewServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_reviews_handler(
    State(service): State<Arc<ReviewServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    client_json(&service.list_reviews().await?)
}

pub async fn create_review_handler(
    State(service): State<Arc<ReviewServiceImpl>>,
    JsonBody(review): JsonBody<Review>,
) -> Result<impl IntoResponse, HandlerError> {
    client_json(&service.add_review(review).await?)
}
