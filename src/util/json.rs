//! Rendering of stored BSON as the JSON storefront clients consume.
//!
//! ObjectIds become bare hex strings, binary payloads become standard
//! base64 and dates become RFC 3339; everything else uses relaxed
//! Extended JSON.

use base64::{engine::general_purpose::STANDARD, Engine};
use bson::Bson;
use serde::Serialize;
use serde_json::{Map, Value};

pub fn bson_to_client_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Binary(bin) => Value::String(STANDARD.encode(&bin.bytes)),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => {
            let map: Map<String, Value> = doc
                .into_iter()
                .map(|(k, v)| (k, bson_to_client_json(v)))
                .collect();
            Value::Object(map)
        }
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_client_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// Serialize a stored record (or collection of records) for a response body
pub fn to_client_json<T: Serialize>(value: &T) -> Result<Value, bson::ser::Error> {
    Ok(bson_to_client_json(bson::to_bson(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId, spec::BinarySubtype, Binary};
    use serde_json::json;

    #[test]
    fn test_object_id_renders_as_hex() {
        let oid = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        assert_eq!(bson_to_client_json(Bson::ObjectId(oid)), json!("65a1f0c2e4b0a1b2c3d4e5f6"));
    }

    #[test]
    fn test_binary_renders_as_base64() {
        let bin = Binary { subtype: BinarySubtype::Generic, bytes: vec![0x89, b'P', b'N', b'G'] };
        assert_eq!(bson_to_client_json(Bson::Binary(bin)), json!("iVBORw=="));
    }

    #[test]
    fn test_nested_document() {
        let oid = ObjectId::new();
        let value = bson_to_client_json(Bson::Document(doc! {
            "_id": oid,
            "items": [{ "qty": 2_i32, "price": 10.5 }],
            "note": Bson::Null,
        }));
        assert_eq!(
            value,
            json!({ "_id": oid.to_hex(), "items": [{ "qty": 2, "price": 10.5 }], "note": null })
        );
    }
}
