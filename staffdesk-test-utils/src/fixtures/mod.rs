//! Test fixture modules for database record creation.
//!
//! Each submodule adds an accessor to [`TestContext`](crate::TestContext) returning a
//! fixture handle for one table:
//!
//! - `employee` - employee records with explicit sequential numbers
//! - `applicant` - job applicant records with controllable timestamps
//! - `invoice` - invoice records
//!
//! `factory` builds unsaved active models with standard test values.

pub mod applicant;
pub mod employee;
pub mod factory;
pub mod invoice;
