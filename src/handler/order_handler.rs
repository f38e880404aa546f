use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;

use crate::dto::order_dto::{OrderQuery, OrderSubmission, UpdateOrderStatusRequest};
use crate::handler::{client_json, parse_object_id, validate_payload, JsonBody};
use crate::service::order_service::{OrderService, OrderServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_orders_handler(
    State(service): State<Arc<OrderServiceImpl>>,
    Query(query): Query<OrderQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let orders = service.list_orders(query.email_filter()).await?;
    client_json(&orders)
}

pub async fn place_orders_handler(
    State(service): State<Arc<OrderServiceImpl>>,
    JsonBody(submission): JsonBody<OrderSubmission>,
) -> Result<impl IntoResponse, HandlerError> {
    client_json(&service.place_orders(submission).await?)
}

pub async fn update_order_status_handler(
    State(service): State<Arc<OrderServiceImpl>>,
    JsonBody(payload): JsonBody<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    let id = parse_object_id(&payload.id, "order")?;
    client_json(&service.update_status(id, &payload.status).await?)
}

pub async fn delete_order_handler(
    State(service): State<Arc<OrderServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "order")?;
    client_json(&service.delete_order(id).await?)
}
