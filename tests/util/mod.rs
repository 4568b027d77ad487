//! Shared helpers for the integration tests.

use axum::{body::Body, response::Response};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;

/// Collects a response body and deserializes it as JSON.
pub async fn read_json<T: DeserializeOwned>(resp: Response<Body>) -> T {
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
