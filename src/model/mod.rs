//! Data transfer objects exchanged between the API and the web client.

pub mod api;
pub mod applicant;
pub mod employee;
pub mod invoice;
pub mod summary;
