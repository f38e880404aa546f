use bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The shopping cart of one customer; line items live in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Cart {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[serde(flatten)]
    pub extra: Document,
}
