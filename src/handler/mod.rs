pub mod cart_handler;
pub mod drone_handler;
pub mod health_handler;
pub mod order_handler;
pub mod review_handler;
pub mod user_handler;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use bson::oid::ObjectId;
use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use crate::util::error::HandlerError;
use crate::util::json::to_client_json;

/// `Json` body extractor whose rejections (missing fields, malformed JSON,
/// wrong content type) answer with a JSON 400 like every other input error
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(HandlerError::bad_request(rejection.body_text())),
        }
    }
}

/// Render a stored value the way storefront clients expect it
pub(crate) fn client_json<T: Serialize>(value: &T) -> Result<Json<Value>, HandlerError> {
    to_client_json(value)
        .map(Json)
        .map_err(|e| HandlerError::internal(format!("Failed to render response: {}", e)))
}

pub(crate) fn parse_object_id(raw: &str, what: &str) -> Result<ObjectId, HandlerError> {
    ObjectId::parse_str(raw).map_err(|_| HandlerError::bad_request(format!("Invalid {} id: {}", what, raw)))
}

pub(crate) fn validate_payload<T: Validate>(payload: &T) -> Result<(), HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::bad_request(format!("Validation error: {}", e)))
}
