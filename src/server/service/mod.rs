//! Service layer for validation and record operations.
//!
//! Services validate incoming DTOs, call into the repositories and convert the resulting
//! models back into DTOs. Missing records are reported as `RecordError`s so controllers
//! can answer with a 404 without inspecting the result.

pub mod applicant;
pub mod employee;
pub mod invoice;
pub mod retry;
pub mod validate;
