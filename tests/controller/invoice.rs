//! Tests for the invoice endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use entity::invoice::InvoiceStatus as DbInvoiceStatus;
use staffdesk::{
    model::{
        api::{ErrorDto, MessageDto},
        invoice::{CreateInvoiceDto, InvoiceDto, InvoiceStatus, UpdateInvoiceDto},
    },
    server::controller::invoice::{
        create_invoice, delete_invoice, get_invoice_by_id, get_invoices, update_invoice,
    },
};

use super::*;

fn new_invoice() -> CreateInvoiceDto {
    CreateInvoiceDto {
        employee: "Ada Lovelace".to_string(),
        amount: Some(1200.0),
        issue_date: NaiveDate::from_ymd_opt(2025, 4, 1),
        due_date: NaiveDate::from_ymd_opt(2025, 5, 1),
        status: None,
    }
}

/// Expect 201 with the default Pending status
#[tokio::test]
async fn create_defaults_to_pending() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = create_invoice(State(test.to_app_state()), Json(new_invoice())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let invoice: InvoiceDto = read_json(resp).await;
    assert_eq!(invoice.status, InvoiceStatus::Pending);
    assert_eq!(invoice.due_date, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());

    Ok(())
}

/// Expect 400 naming the missing due date
#[tokio::test]
async fn create_rejects_missing_due_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let body = CreateInvoiceDto {
        due_date: None,
        ..new_invoice()
    };
    let result = create_invoice(State(test.to_app_state()), Json(body)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: ErrorDto = read_json(resp).await;
    assert!(error.error.contains("due_date"));

    Ok(())
}

/// Expect 400 for a negative amount
#[tokio::test]
async fn create_rejects_negative_amount() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let body = CreateInvoiceDto {
        amount: Some(-10.0),
        ..new_invoice()
    };
    let result = create_invoice(State(test.to_app_state()), Json(body)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect invoices ordered newest first
#[tokio::test]
async fn list_returns_newest_first() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_invoice("First", 10.0, DbInvoiceStatus::Paid)
        .with_invoice("Second", 20.0, DbInvoiceStatus::Overdue)
        .build()
        .await?;

    let result = get_invoices(State(test.to_app_state())).await;

    let invoices: Vec<InvoiceDto> = read_json(result.unwrap().into_response()).await;
    let employees: Vec<String> = invoices.into_iter().map(|i| i.employee).collect();
    assert_eq!(employees, vec!["Second", "First"]);

    Ok(())
}

/// Expect 404 with the not found message for an unknown ID
#[tokio::test]
async fn get_by_id_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_invoice_by_id(State(test.to_app_state()), Path(11)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let error: ErrorDto = read_json(resp).await;
    assert_eq!(error.error, "Invoice not found");

    Ok(())
}

/// Expect a status change to leave the amount untouched
#[tokio::test]
async fn update_marks_paid() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let invoice = test
        .invoice()
        .insert_invoice("Ada Lovelace", 75.25, DbInvoiceStatus::Overdue)
        .await?;

    let result = update_invoice(
        State(test.to_app_state()),
        Path(invoice.id),
        Json(UpdateInvoiceDto {
            status: Some(InvoiceStatus::Paid),
            ..Default::default()
        }),
    )
    .await;

    let updated: InvoiceDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(updated.status, InvoiceStatus::Paid);
    assert_eq!(updated.amount, 75.25);

    Ok(())
}

/// Expect the deletion message, then 404 on a repeated delete
#[tokio::test]
async fn delete_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let invoice = test
        .invoice()
        .insert_invoice("Ada Lovelace", 75.25, DbInvoiceStatus::Pending)
        .await?;

    let result = delete_invoice(State(test.to_app_state()), Path(invoice.id)).await;
    let message: MessageDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(message.message, "Invoice deleted successfully");

    let result = delete_invoice(State(test.to_app_state()), Path(invoice.id)).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
