//! Server application core modules.
//!
//! This module contains the REST backend of StaffDesk: HTTP routing and OpenAPI documentation,
//! controllers for employees, applicants, and invoices, the services validating their input,
//! and the repositories persisting them through SeaORM.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
