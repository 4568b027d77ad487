//! HTTP controller endpoints for the StaffDesk web API.
//!
//! Axum handlers for employees, applicants, invoices and the health check. Handlers
//! extract the request, delegate to a service and translate the result into a status
//! code and JSON body. Each handler carries a utoipa annotation for the OpenAPI document.

pub mod applicant;
pub mod employee;
pub mod health;
pub mod invoice;
