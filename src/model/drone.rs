use bson::{oid::ObjectId, spec::BinarySubtype, Binary};
use serde::{Deserialize, Serialize};

/// A product listing. Only these fields are ever stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img: Binary,
}

impl Drone {
    pub fn new(name: String, description: String, price: f64, img: Vec<u8>) -> Self {
        Drone {
            id: None,
            name,
            description,
            price,
            img: Binary { subtype: BinarySubtype::Generic, bytes: img },
        }
    }
}
