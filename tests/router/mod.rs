//! Router-level tests exercising path matching, extractors and the docs routes.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use staffdesk::{
    model::{applicant::ApplicantDto, employee::EmployeeDto},
    server::router::routes,
};
use staffdesk_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::read_json;

fn app(test: &TestContext) -> Router {
    routes().with_state(test.to_app_state())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// Expect `/api/hire/all` to reach the list handler rather than the `{id}` capture
#[tokio::test]
async fn hire_all_is_not_captured_as_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_applicant("Grace Hopper", "grace@example.com")
        .build()
        .await?;

    let resp = app(&test).oneshot(get("/api/hire/all")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let applicants: Vec<ApplicantDto> = read_json(resp).await;
    assert_eq!(applicants.len(), 1);

    Ok(())
}

/// Expect the search route to read the `query` parameter
#[tokio::test]
async fn hire_search_reads_query_parameter() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_applicant("Grace Hopper", "grace@example.com")
        .with_applicant("Ada Lovelace", "ada@example.com")
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(get("/api/hire/search?query=ada"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let applicants: Vec<ApplicantDto> = read_json(resp).await;
    assert_eq!(applicants.len(), 1);
    assert_eq!(applicants[0].name, "Ada Lovelace");

    Ok(())
}

/// Expect a JSON body to be accepted and answered with 201
#[tokio::test]
async fn post_employee_json() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/employees")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"name":"Ada Lovelace","department":"Research","salary":72000}"#,
        ))
        .unwrap();

    let resp = app(&test).oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let employee: EmployeeDto = read_json(resp).await;
    assert_eq!(employee.employee_id, "EMP001");
    assert_eq!(employee.department.as_deref(), Some("Research"));

    Ok(())
}

/// Expect an unknown status filter to be rejected before reaching the controller
#[tokio::test]
async fn unknown_status_filter_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = app(&test)
        .oneshot(get("/api/employees?status=Retired"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a non-numeric ID to be rejected by the path extractor
#[tokio::test]
async fn non_numeric_id_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = app(&test)
        .oneshot(get("/api/invoice/latest"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the OpenAPI document to list the API paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(get("/api/docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let doc: serde_json::Value = read_json(resp).await;
    assert!(doc["paths"]["/api/hire/search"].is_object());
    assert!(doc["paths"]["/api/employees/{id}"].is_object());

    Ok(())
}

/// Expect the health route to answer without any tables
#[tokio::test]
async fn serves_health() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test).oneshot(get("/api/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
