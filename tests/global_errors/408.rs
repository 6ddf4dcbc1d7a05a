//! tests/global_errors/408.rs
//! Ensures that requests taking too long result in a 408 timeout.

use super::common;

use axum::routing::get;
use hello_backend::{api::status::status_routes, build_router, AppState, EnvironmentVariables};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn returns_408_when_request_times_out() {
    let env: EnvironmentVariables = EnvironmentVariables {
        default_timeout_seconds: 1,
        ..EnvironmentVariables::default()
    };

    // A route that sleeps past the configured timeout, behind the same stack.
    let routes = status_routes().route(
        "/slow",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            "too late"
        }),
    );
    let base_url: String = common::spawn_router(build_router(routes, AppState::new(env)));

    let resp_result: Result<Result<reqwest::Response, reqwest::Error>, tokio::time::error::Elapsed> = timeout(
        Duration::from_secs(5), // client-side timeout duration
        async {
            reqwest::Client::new()
                .get(format!("{}/slow", base_url))
                .send()
                .await
        }
    )
    .await;

    // Ensure the client did not timeout waiting for a response.
    assert!(resp_result.is_ok(), "Client timed out waiting for server.");

    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let json: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(json["status"], "REQUEST_TIMEOUT");
    assert_eq!(json["code"], 408);
}
