//! Tests for the hiring endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};
use staffdesk::{
    model::{
        api::{ErrorDto, MessageDto},
        applicant::{ApplicantDto, CreateApplicantDto, UpdateApplicantDto},
    },
    server::controller::applicant::{
        create_applicant, delete_applicant, get_all_applicants, get_applicant_by_id,
        search_applicants, update_applicant, SearchParams,
    },
};

use super::*;

/// Expect 201 with server-managed timestamps
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let body = CreateApplicantDto {
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        position: "Engineer".to_string(),
        ..Default::default()
    };
    let result = create_applicant(State(test.to_app_state()), Json(body)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let applicant: ApplicantDto = read_json(resp).await;
    assert_eq!(applicant.name, "Grace Hopper");
    assert_eq!(applicant.resume_url, "");
    assert_eq!(applicant.created_at, applicant.updated_at);

    Ok(())
}

/// Expect applicants newest first
#[tokio::test]
async fn list_returns_newest_first() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let now = Utc::now().naive_utc();
    test.applicant()
        .insert_applicant_at("Older", "older@example.com", now - Duration::hours(3))
        .await?;
    test.applicant()
        .insert_applicant_at("Newer", "newer@example.com", now)
        .await?;

    let result = get_all_applicants(State(test.to_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let applicants: Vec<ApplicantDto> = read_json(resp).await;
    let names: Vec<String> = applicants.into_iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["Newer", "Older"]);

    Ok(())
}

/// Expect search to match email ignoring case
#[tokio::test]
async fn search_matches_email_case_insensitively() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_applicant("Grace Hopper", "grace@navy.example")
        .with_applicant("Ada Lovelace", "ada@engine.example")
        .build()
        .await?;

    let result = search_applicants(
        State(test.to_app_state()),
        Query(SearchParams {
            query: Some("NAVY".to_string()),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let applicants: Vec<ApplicantDto> = read_json(resp).await;
    assert_eq!(applicants.len(), 1);
    assert_eq!(applicants[0].name, "Grace Hopper");

    Ok(())
}

/// Expect every applicant when no query is given
#[tokio::test]
async fn search_without_query_returns_all() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_applicant("Grace Hopper", "grace@navy.example")
        .with_applicant("Ada Lovelace", "ada@engine.example")
        .build()
        .await?;

    let result = search_applicants(
        State(test.to_app_state()),
        Query(SearchParams { query: None }),
    )
    .await;

    let applicants: Vec<ApplicantDto> = read_json(result.unwrap().into_response()).await;
    assert_eq!(applicants.len(), 2);

    Ok(())
}

/// Expect 404 with the not found message for an unknown ID
#[tokio::test]
async fn get_by_id_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_applicant_by_id(State(test.to_app_state()), Path(3)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let error: ErrorDto = read_json(resp).await;
    assert_eq!(error.error, "Applicant not found");

    Ok(())
}

/// Expect the update to apply and bump updated_at
#[tokio::test]
async fn update_bumps_updated_at() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let created_at = Utc::now().naive_utc() - Duration::days(2);
    let applicant = test
        .applicant()
        .insert_applicant_at("Grace Hopper", "grace@example.com", created_at)
        .await?;

    let result = update_applicant(
        State(test.to_app_state()),
        Path(applicant.id),
        Json(UpdateApplicantDto {
            position: Some("Admiral".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: ApplicantDto = read_json(resp).await;
    assert_eq!(updated.position, "Admiral");
    assert_eq!(updated.email, "grace@example.com");
    assert!(updated.updated_at > created_at);

    Ok(())
}

/// Expect the deletion message, then 404 on a repeated delete
#[tokio::test]
async fn delete_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let applicant = test
        .applicant()
        .insert_applicant("Grace Hopper", "grace@example.com")
        .await?;

    let result = delete_applicant(State(test.to_app_state()), Path(applicant.id)).await;
    let message: MessageDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(message.message, "Applicant deleted");

    let result = delete_applicant(State(test.to_app_state()), Path(applicant.id)).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let error: ErrorDto = read_json(resp).await;
    assert_eq!(error.error, "Applicant not found");

    Ok(())
}
