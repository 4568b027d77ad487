//! StaffDesk: employee, hiring, and invoice management.
//!
//! The `model` module holds the DTOs shared between the REST API and the web client.
//! The `server` module (behind the `server` feature) holds the axum API itself.

pub mod model;

#[cfg(feature = "server")]
pub mod server;
