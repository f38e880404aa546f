use std::sync::Arc;

use axum::{routing::{get, put}, Router};

use crate::handler::cart_handler::{clear_cart_handler, get_cart_handler, save_cart_handler};
use crate::service::cart_service::CartServiceImpl;

pub fn cart_router(service: Arc<CartServiceImpl>) -> Router {
    Router::new()
        .route("/cart", put(save_cart_handler))
        .route("/cart/{email}", get(get_cart_handler).delete(clear_cart_handler))
        .with_state(service)
}
