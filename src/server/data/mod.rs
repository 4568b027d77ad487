//! Data access layer repositories.
//!
//! One repository per table. Repositories borrow the shared `DatabaseConnection`, return
//! SeaORM models and leave validation and error mapping to the service layer.

pub mod applicant;
pub mod employee;
pub mod invoice;
