use std::sync::Arc;

use axum::{routing::{delete, get}, Router};

use crate::handler::order_handler::{
    delete_order_handler,
    list_orders_handler,
    place_orders_handler,
    update_order_status_handler,
};
use crate::service::order_service::OrderServiceImpl;

pub fn order_router(service: Arc<OrderServiceImpl>) -> Router {
    Router::new()
        .route(
            "/orders",
            get(list_orders_handler).post(place_orders_handler).put(update_order_status_handler),
        )
        .route("/orders/{id}", delete(delete_order_handler))
        .with_state(service)
}
