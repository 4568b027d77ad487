//! Tests for the employee endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::employee::EmployeeStatus as DbEmployeeStatus;
use staffdesk::{
    model::{
        api::{ErrorDto, MessageDto},
        employee::{CreateEmployeeDto, EmployeeDto, EmployeeStatus, UpdateEmployeeDto},
    },
    server::controller::employee::{
        create_employee, delete_employee, get_all_employees, get_employee_by_id, update_employee,
        EmployeeFilterParams,
    },
};

use super::*;

/// Expect 201 and the next sequential employee ID
#[tokio::test]
async fn create_returns_created_with_next_employee_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_employee(41, "Ada Lovelace", DbEmployeeStatus::Active)
        .build()
        .await?;

    let body = CreateEmployeeDto {
        name: "Alan Turing".to_string(),
        position: Some("Cryptanalyst".to_string()),
        ..Default::default()
    };
    let result = create_employee(State(test.to_app_state()), Json(body)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let employee: EmployeeDto = read_json(resp).await;
    assert_eq!(employee.employee_id, "EMP042");
    assert_eq!(employee.status, EmployeeStatus::Active);

    Ok(())
}

/// Expect 400 when the name is missing
#[tokio::test]
async fn create_rejects_missing_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = create_employee(
        State(test.to_app_state()),
        Json(CreateEmployeeDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 when the employee table does not exist
#[tokio::test]
async fn create_fails_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let body = CreateEmployeeDto {
        name: "Ada Lovelace".to_string(),
        ..Default::default()
    };
    let result = create_employee(State(test.to_app_state()), Json(body)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect only employees with the requested status
#[tokio::test]
async fn list_filters_by_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_employee(1, "Ada Lovelace", DbEmployeeStatus::Active)
        .with_employee(2, "Alan Turing", DbEmployeeStatus::Inactive)
        .with_employee(3, "Grace Hopper", DbEmployeeStatus::Active)
        .build()
        .await?;

    let result = get_all_employees(
        State(test.to_app_state()),
        Query(EmployeeFilterParams {
            status: Some(EmployeeStatus::Active),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let employees: Vec<EmployeeDto> = read_json(resp).await;
    let ids: Vec<String> = employees.into_iter().map(|e| e.employee_id).collect();
    assert_eq!(ids, vec!["EMP001", "EMP003"]);

    Ok(())
}

/// Expect 404 with the not found message for an unknown ID
#[tokio::test]
async fn get_by_id_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_employee_by_id(State(test.to_app_state()), Path(7)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let error: ErrorDto = read_json(resp).await;
    assert_eq!(error.error, "Employee not found");

    Ok(())
}

/// Expect fields absent from the body to keep their values
#[tokio::test]
async fn update_changes_only_provided_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let employee = test.employee().insert_employee(1, "Ada Lovelace").await?;

    let result = update_employee(
        State(test.to_app_state()),
        Path(employee.id),
        Json(UpdateEmployeeDto {
            department: Some("Research".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: EmployeeDto = read_json(resp).await;
    assert_eq!(updated.department.as_deref(), Some("Research"));
    assert_eq!(updated.name, "Ada Lovelace");
    assert_eq!(updated.position, employee.position);
    assert_eq!(updated.employee_id, "EMP001");

    Ok(())
}

/// Expect 404 when updating an unknown employee
#[tokio::test]
async fn update_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = update_employee(
        State(test.to_app_state()),
        Path(1),
        Json(UpdateEmployeeDto::default()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the deletion message, then 404 on a repeated delete
#[tokio::test]
async fn delete_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let employee = test.employee().insert_employee(1, "Ada Lovelace").await?;

    let result = delete_employee(State(test.to_app_state()), Path(employee.id)).await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let message: MessageDto = read_json(resp).await;
    assert_eq!(message.message, "Employee deleted");

    let result = delete_employee(State(test.to_app_state()), Path(employee.id)).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
