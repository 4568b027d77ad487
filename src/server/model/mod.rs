//! Server application models and type definitions.
//!
//! Application state shared by the HTTP handlers, type aliases for the SeaORM entity models,
//! and conversions between entity models and the API's DTOs.

pub mod app;
pub mod convert;
pub mod db;
