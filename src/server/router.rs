//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa specification. The
//! collected OpenAPI document is served at `/api/docs/openapi.json` with Swagger UI at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/health` - Server and database health
/// - `POST|GET /api/employees` - Create or list employees
/// - `GET|PUT|DELETE /api/employees/{id}` - Single employee
/// - `POST /api/hire` - Record an applicant
/// - `GET /api/hire/all` - List applicants
/// - `GET /api/hire/search` - Search applicants by name or email
/// - `GET|PUT|DELETE /api/hire/{id}` - Single applicant
/// - `GET|POST /api/invoice` - List or create invoices
/// - `GET|PUT|DELETE /api/invoice/{id}` - Single invoice
///
/// Literal segments such as `/api/hire/all` take precedence over the `{id}` capture.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be given state and merged into the main application router.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "StaffDesk", description = "StaffDesk API"), tags(
        (name = controller::health::HEALTH_TAG, description = "Health check"),
        (name = controller::employee::EMPLOYEE_TAG, description = "Employee API routes"),
        (name = controller::applicant::HIRING_TAG, description = "Hiring API routes"),
        (name = controller::invoice::INVOICE_TAG, description = "Invoice API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(
            controller::employee::create_employee,
            controller::employee::get_all_employees
        ))
        .routes(routes!(
            controller::employee::get_employee_by_id,
            controller::employee::update_employee,
            controller::employee::delete_employee
        ))
        .routes(routes!(controller::applicant::create_applicant))
        .routes(routes!(controller::applicant::get_all_applicants))
        .routes(routes!(controller::applicant::search_applicants))
        .routes(routes!(
            controller::applicant::get_applicant_by_id,
            controller::applicant::update_applicant,
            controller::applicant::delete_applicant
        ))
        .routes(routes!(
            controller::invoice::get_invoices,
            controller::invoice::create_invoice
        ))
        .routes(routes!(
            controller::invoice::get_invoice_by_id,
            controller::invoice::update_invoice,
            controller::invoice::delete_invoice
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
