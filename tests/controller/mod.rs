//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, verifying status codes and
//! response bodies for success, validation and not found cases.

mod applicant;
mod employee;
mod health;
mod invoice;

use staffdesk_test_utils::prelude::*;

use crate::util::read_json;
