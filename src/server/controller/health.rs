use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use dioxus_logger::tracing;
use sea_orm::ConnectionTrait;

use crate::{model::api::HealthDto, server::model::app::AppState};

pub static HEALTH_TAG: &str = "health";

/// Report whether the server can reach its database
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Health status, `ok` is false when the database is unreachable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let db_ok = match state.db.execute_unprepared("SELECT 1").await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Health check failed to reach database: {}", e);
            false
        }
    };

    (
        StatusCode::OK,
        Json(HealthDto {
            ok: db_ok,
            db_ok,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
