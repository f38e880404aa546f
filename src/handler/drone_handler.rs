use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::response::IntoResponse;
use bytes::BytesMut;
use tracing::{debug, error, info};

use crate::dto::drone_dto::{DroneForm, DroneFormBuilder};
use crate::handler::{client_json, parse_object_id};
use crate::service::drone_service::{DroneService, DroneServiceImpl};
use crate::util::error::HandlerError;

/// Collect `name`, `description`, `price` and the `img` file from a drone upload.
/// Unknown parts are skipped.
async fn read_drone_form(mut multipart: Multipart) -> Result<DroneForm, HandlerError> {
    let mut builder = DroneFormBuilder::default();

    while let Some(mut field) = multipart.next_field().await.map_err(|e| {
        error!("[read_drone_form] Error getting next field: {}", e);
        HandlerError::bad_request(format!("Failed to get next field: {}", e))
    })? {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();
        debug!("[read_drone_form] Processing field: {}", name);
        match name.as_str() {
            "img" => {
                let mut buf = BytesMut::new();
                while let Some(chunk) = field.chunk().await.map_err(|e| {
                    error!("[read_drone_form] Error reading image chunk: {}", e);
                    HandlerError::bad_request(format!("Failed to read img: {}", e))
                })? {
                    buf.extend_from_slice(&chunk);
                }
                info!(
                    filename = field.file_name().unwrap_or_default(),
                    bytes = buf.len(),
                    "[read_drone_form] Received image"
                );
                builder.img = Some(buf.to_vec());
            }
            "name" | "description" | "price" => {
                let text = field.text().await.map_err(|e| {
                    HandlerError::bad_request(format!("Failed to read {}: {}", name, e))
                })?;
                match name.as_str() {
                    "name" => builder.name = Some(text),
                    "description" => builder.description = Some(text),
                    _ => builder.price = Some(text),
                }
            }
            _ => debug!("[read_drone_form] Skipping unknown field: {}", name),
        }
    }

    builder.build().map_err(HandlerError::bad_request)
}

pub async fn list_drones_handler(
    State(service): State<Arc<DroneServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    client_json(&service.list_drones().await?)
}

/// Responds with `null` when no drone has this id
pub async fn get_drone_handler(
    State(service): State<Arc<DroneServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "drone")?;
    client_json(&service.get_drone(id).await?)
}

pub async fn create_drone_handler(
    State(service): State<Arc<DroneServiceImpl>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let form = read_drone_form(multipart).await?;
    client_json(&service.create_drone(form).await?)
}

pub async fn replace_drone_handler(
    State(service): State<Arc<DroneServiceImpl>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "drone")?;
    let form = read_drone_form(multipart).await?;
    client_json(&service.replace_drone(id, form).await?)
}

pub async fn delete_drone_handler(
    State(service): State<Arc<DroneServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "drone")?;
    client_json(&service.delete_drone(id).await?)
}
