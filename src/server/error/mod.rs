//! Error types for the StaffDesk server.
//!
//! Domain errors live in their own submodules and are aggregated into [`Error`], which
//! controllers return directly. Every error implements `IntoResponse` so that client
//! mistakes become 4xx responses while anything else is logged and answered with a
//! generic 500.

pub mod config;
pub mod record;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, record::RecordError},
};

/// Main error type for the StaffDesk server.
///
/// Uses `thiserror`'s `#[from]` so the `?` operator converts domain and database errors
/// automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Record error (not found, missing or invalid fields).
    #[error(transparent)]
    RecordError(#[from] RecordError),
    /// Internal error indicating a bug in StaffDesk's code.
    #[error("Internal error with StaffDesk's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Maps errors to HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing or invalid fields
/// - 404 Not Found - Record does not exist
/// - 500 Internal Server Error - Everything else, logged at error level
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::RecordError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use sea_orm::DbErr;

    use super::{config::ConfigError, record::RecordError, Error};

    #[test]
    fn not_found_errors_map_to_404() {
        let resp = Error::from(RecordError::InvoiceNotFound(3)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_errors_map_to_400() {
        let resp = Error::from(RecordError::MissingField("name")).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = Error::from(RecordError::InvalidValue {
            field: "amount",
            reason: "must not be negative".to_string(),
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_and_config_errors_map_to_500() {
        let resp = Error::from(DbErr::Custom("boom".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp =
            Error::from(ConfigError::MissingEnvVar("DATABASE_URL".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
