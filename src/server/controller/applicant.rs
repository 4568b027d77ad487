use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        applicant::{ApplicantDto, CreateApplicantDto, UpdateApplicantDto},
    },
    server::{error::Error, model::app::AppState, service::applicant::ApplicantService},
};

pub static HIRING_TAG: &str = "hiring";

/// Query parameters for searching applicants
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Text to look for in applicant names and emails, ignoring case
    pub query: Option<String>,
}

/// Record a new job applicant
#[utoipa::path(
    post,
    path = "/api/hire",
    tag = HIRING_TAG,
    request_body = CreateApplicantDto,
    responses(
        (status = 201, description = "Applicant created", body = ApplicantDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_applicant(
    State(state): State<AppState>,
    Json(applicant): Json<CreateApplicantDto>,
) -> Result<impl IntoResponse, Error> {
    let applicant = ApplicantService::new(&state.db).create(applicant).await?;

    Ok((StatusCode::CREATED, Json(applicant)))
}

/// List every applicant, newest first
#[utoipa::path(
    get,
    path = "/api/hire/all",
    tag = HIRING_TAG,
    responses(
        (status = 200, description = "All applicants", body = Vec<ApplicantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_applicants(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let applicants = ApplicantService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(applicants)))
}

/// Search applicants by name or email
#[utoipa::path(
    get,
    path = "/api/hire/search",
    tag = HIRING_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Matching applicants, newest first", body = Vec<ApplicantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_applicants(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    let applicants = ApplicantService::new(&state.db)
        .search(params.query.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(applicants)))
}

#[utoipa::path(
    get,
    path = "/api/hire/{id}",
    tag = HIRING_TAG,
    params(("id" = i32, Path, description = "Applicant database ID")),
    responses(
        (status = 200, description = "Applicant found", body = ApplicantDto),
        (status = 404, description = "Applicant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applicant_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let applicant = ApplicantService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(applicant)))
}

#[utoipa::path(
    put,
    path = "/api/hire/{id}",
    tag = HIRING_TAG,
    params(("id" = i32, Path, description = "Applicant database ID")),
    request_body = UpdateApplicantDto,
    responses(
        (status = 200, description = "Applicant updated", body = ApplicantDto),
        (status = 404, description = "Applicant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_applicant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(changes): Json<UpdateApplicantDto>,
) -> Result<impl IntoResponse, Error> {
    let applicant = ApplicantService::new(&state.db).update(id, changes).await?;

    Ok((StatusCode::OK, Json(applicant)))
}

#[utoipa::path(
    delete,
    path = "/api/hire/{id}",
    tag = HIRING_TAG,
    params(("id" = i32, Path, description = "Applicant database ID")),
    responses(
        (status = 200, description = "Applicant deleted", body = MessageDto),
        (status = 404, description = "Applicant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_applicant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ApplicantService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Applicant deleted"))))
}
