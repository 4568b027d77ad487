//! Tests for the health endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use staffdesk::{model::api::HealthDto, server::controller::health::health};

use super::*;

/// Expect a healthy report when the database answers
#[tokio::test]
async fn reports_database_reachable() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = health(State(test.to_app_state())).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let health: HealthDto = read_json(resp).await;
    assert!(health.ok);
    assert!(health.db_ok);
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));

    Ok(())
}
