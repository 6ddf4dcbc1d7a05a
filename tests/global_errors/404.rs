//! tests/global_errors/404.rs
//! Ensures that hitting an unknown route returns HTTP 404 from the fallback.

use super::common;

use hello_backend::api::status::{HELLO_MESSAGE, ROOT_MESSAGE};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app();

    // Send a GET request to a route that does not exist.
    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/unknown", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: String = resp.text().await.unwrap();

    // The runtime default must never look like one of the status bodies.
    assert_ne!(body, ROOT_MESSAGE);
    assert_ne!(body, HELLO_MESSAGE);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "NOT_FOUND");
    assert_eq!(json["code"], 404);
    assert_eq!(json["messages"][0], "The requested route does not exist");
}

#[tokio::test]
async fn nested_paths_under_hello_are_not_mapped() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/hello/world", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
