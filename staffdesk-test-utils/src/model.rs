//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main staffdesk crate to keep fixtures and
//! assertions readable.

/// Type alias for the employee database model.
pub type EmployeeModel = entity::employee::Model;

/// Type alias for the job applicant database model.
pub type ApplicantModel = entity::applicant::Model;

/// Type alias for the invoice database model.
pub type InvoiceModel = entity::invoice::Model;
