use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::handler::drone_handler::{
    create_drone_handler,
    delete_drone_handler,
    get_drone_handler,
    list_drones_handler,
    replace_drone_handler,
};
use crate::service::drone_service::DroneServiceImpl;

pub fn drone_router(service: Arc<DroneServiceImpl>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/drones", get(list_drones_handler).post(create_drone_handler))
        .route(
            "/drones/{id}",
            get(get_drone_handler).put(replace_drone_handler).delete(delete_drone_handler),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(service)
}
