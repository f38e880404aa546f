use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::handler::{client_json, validate_payload, JsonBody};
use crate::model::cart::Cart;
use crate::service::cart_service::{CartService, CartServiceImpl};
use crate::util::error::HandlerError;

/// Responds with `null` when the customer has no cart
pub async fn get_cart_handler(
    State(service): State<Arc<CartServiceImpl>>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    client_json(&service.get_cart(&email).await?)
}

pub async fn save_cart_handler(
    State(service): State<Arc<CartServiceImpl>>,
    JsonBody(cart): JsonBody<Cart>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&cart)?;
    client_json(&service.save_cart(cart).await?)
}

pub async fn clear_cart_handler(
    State(service): State<Arc<CartServiceImpl>>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    client_json(&service.clear_cart(&email).await?)
}
