use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        invoice::{CreateInvoiceDto, InvoiceDto, UpdateInvoiceDto},
    },
    server::{error::Error, model::app::AppState, service::invoice::InvoiceService},
};

pub static INVOICE_TAG: &str = "invoice";

/// List invoices, most recently created first
#[utoipa::path(
    get,
    path = "/api/invoice",
    tag = INVOICE_TAG,
    responses(
        (status = 200, description = "All invoices", body = Vec<InvoiceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invoices(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let invoices = InvoiceService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(invoices)))
}

#[utoipa::path(
    get,
    path = "/api/invoice/{id}",
    tag = INVOICE_TAG,
    params(("id" = i32, Path, description = "Invoice database ID")),
    responses(
        (status = 200, description = "Invoice found", body = InvoiceDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invoice_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let invoice = InvoiceService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(invoice)))
}

/// Create an invoice, status defaults to `Pending`
#[utoipa::path(
    post,
    path = "/api/invoice",
    tag = INVOICE_TAG,
    request_body = CreateInvoiceDto,
    responses(
        (status = 201, description = "Invoice created", body = InvoiceDto),
        (status = 400, description = "Required field missing or amount invalid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(invoice): Json<CreateInvoiceDto>,
) -> Result<impl IntoResponse, Error> {
    let invoice = InvoiceService::new(&state.db).create(invoice).await?;

    Ok((StatusCode::CREATED, Json(invoice)))
}

#[utoipa::path(
    put,
    path = "/api/invoice/{id}",
    tag = INVOICE_TAG,
    params(("id" = i32, Path, description = "Invoice database ID")),
    request_body = UpdateInvoiceDto,
    responses(
        (status = 200, description = "Invoice updated", body = InvoiceDto),
        (status = 400, description = "Employee blank or amount invalid", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(changes): Json<UpdateInvoiceDto>,
) -> Result<impl IntoResponse, Error> {
    let invoice = InvoiceService::new(&state.db).update(id, changes).await?;

    Ok((StatusCode::OK, Json(invoice)))
}

#[utoipa::path(
    delete,
    path = "/api/invoice/{id}",
    tag = INVOICE_TAG,
    params(("id" = i32, Path, description = "Invoice database ID")),
    responses(
        (status = 200, description = "Invoice deleted", body = MessageDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    InvoiceService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Invoice deleted successfully")),
    ))
}
