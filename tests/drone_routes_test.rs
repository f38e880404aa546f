mod common;

use axum::http::StatusCode;
use common::{empty_request, multipart_request, TestApp};
use serde_json::json;

const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G'];

#[tokio::test]
async fn test_create_then_fetch_drone() {
    let app = TestApp::new();
    let req = multipart_request(
        "POST",
        "/drones",
        &[("name", "Falcon X"), ("description", "Long range scout"), ("price", "1299.5")],
        &[("img", "falcon.png", PNG_HEADER)],
    );
    let (status, created) = app.send_json(req).await;
    assert_eq!(status, StatusCode::OK);
    let id = created["insertedId"].as_str().unwrap().to_string();

    let (status, drone) = app.send_json(empty_request("GET", &format!("/drones/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        drone,
        json!({
            "_id": id,
            "name": "Falcon X",
            "description": "Long range scout",
            "price": 1299.5,
            "img": "iVBORw==",
        })
    );

    let (_, all) = app.send_json(empty_request("GET", "/drones")).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_multipart_fields_are_ignored() {
    let app = TestApp::new();
    let req = multipart_request(
        "POST",
        "/drones",
        &[("name", "Kestrel"), ("description", "Racer"), ("price", "450"), ("color", "red")],
        &[("img", "kestrel.png", PNG_HEADER)],
    );
    let (status, _) = app.send_json(req).await;
    assert_eq!(status, StatusCode::OK);
    let docs = app.drones.docs.lock().unwrap();
    assert_eq!(docs[0].price, 450.0);
    assert_eq!(docs[0].img.bytes, PNG_HEADER.to_vec());
}

#[tokio::test]
async fn test_create_drone_requires_every_field() {
    let app = TestApp::new();

    let missing_img = multipart_request(
        "POST",
        "/drones",
        &[("name", "Kestrel"), ("description", "Racer"), ("price", "450")],
        &[],
    );
    let (status, body) = app.send_json(missing_img).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("img"));

    let bad_price = multipart_request(
        "POST",
        "/drones",
        &[("name", "Kestrel"), ("description", "Racer"), ("price", "cheap")],
        &[("img", "kestrel.png", PNG_HEADER)],
    );
    let (status, _) = app.send_json(bad_price).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(app.drones.docs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_drone_is_null() {
    let app = TestApp::new();
    let (status, body) = app.send_json(empty_request("GET", "/drones/65a1f0c2e4b0a1b2c3d4e5f6")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(null));

    let (status, _) = app.send_json(empty_request("GET", "/drones/not-hex")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_replace_and_delete_drone() {
    let app = TestApp::new();
    let (_, created) = app
        .send_json(multipart_request(
            "POST",
            "/drones",
            &[("name", "Osprey"), ("description", "Heavy lift"), ("price", "2000")],
            &[("img", "osprey.png", PNG_HEADER)],
        ))
        .await;
    let id = created["insertedId"].as_str().unwrap().to_string();

    let (status, updated) = app
        .send_json(multipart_request(
            "PUT",
            &format!("/drones/{}", id),
            &[("name", "Osprey II"), ("description", "Heavier lift"), ("price", "2100")],
            &[("img", "osprey2.png", &[1, 2, 3])],
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["matchedCount"], json!(1));

    let (_, drone) = app.send_json(empty_request("GET", &format!("/drones/{}", id))).await;
    assert_eq!(drone["name"], json!("Osprey II"));
    assert_eq!(drone["price"], json!(2100.0));
    assert_eq!(drone["img"], json!("AQID"));

    let (status, deleted) = app.send_json(empty_request("DELETE", &format!("/drones/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["deletedCount"], json!(1));
    let (_, gone) = app.send_json(empty_request("GET", &format!("/drones/{}", id))).await;
    assert_eq!(gone, json!(null));
}
