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
        employee::{CreateEmployeeDto, EmployeeDto, EmployeeStatus, UpdateEmployeeDto},
    },
    server::{error::Error, model::app::AppState, service::employee::EmployeeService},
};

pub static EMPLOYEE_TAG: &str = "employee";

/// Query parameters for listing employees
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeFilterParams {
    /// Only return employees with this status
    pub status: Option<EmployeeStatus>,
}

/// Create an employee with the next sequential employee ID
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = EMPLOYEE_TAG,
    request_body = CreateEmployeeDto,
    responses(
        (status = 201, description = "Employee created", body = EmployeeDto),
        (status = 400, description = "Name missing or salary invalid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(employee): Json<CreateEmployeeDto>,
) -> Result<impl IntoResponse, Error> {
    let employee = EmployeeService::new(&state.db).create(employee).await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// List employees ordered by employee ID
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = EMPLOYEE_TAG,
    params(EmployeeFilterParams),
    responses(
        (status = 200, description = "Employees matching the filter", body = Vec<EmployeeDto>),
        (status = 400, description = "Unknown status value"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_employees(
    State(state): State<AppState>,
    Query(params): Query<EmployeeFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let employees = EmployeeService::new(&state.db)
        .get_all(params.status)
        .await?;

    Ok((StatusCode::OK, Json(employees)))
}

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = i32, Path, description = "Employee database ID")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let employee = EmployeeService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(employee)))
}

/// Update the fields present in the request body
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = i32, Path, description = "Employee database ID")),
    request_body = UpdateEmployeeDto,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeDto),
        (status = 400, description = "Name blank or salary invalid", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(changes): Json<UpdateEmployeeDto>,
) -> Result<impl IntoResponse, Error> {
    let employee = EmployeeService::new(&state.db).update(id, changes).await?;

    Ok((StatusCode::OK, Json(employee)))
}

#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = i32, Path, description = "Employee database ID")),
    responses(
        (status = 200, description = "Employee deleted", body = MessageDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    EmployeeService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Employee deleted"))))
}
