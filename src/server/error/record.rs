use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Client-facing errors for employee, applicant, and invoice records.
#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    /// No employee exists with the given database ID.
    #[error("Employee ID {0} not found")]
    EmployeeNotFound(i32),
    /// No applicant exists with the given database ID.
    #[error("Applicant ID {0} not found")]
    ApplicantNotFound(i32),
    /// No invoice exists with the given database ID.
    #[error("Invoice ID {0} not found")]
    InvoiceNotFound(i32),
    /// A required field was omitted or left blank.
    #[error("Field `{0}` is required")]
    MissingField(&'static str),
    /// A field was provided with a value outside of its allowed range.
    #[error("Field `{field}` is invalid: {reason}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl RecordError {
    fn not_found(message: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::EmployeeNotFound(_) => Self::not_found("Employee not found"),
            Self::ApplicantNotFound(_) => Self::not_found("Applicant not found"),
            Self::InvoiceNotFound(_) => Self::not_found("Invoice not found"),
            err => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
