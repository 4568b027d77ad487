pub mod applicant;
pub mod employee;
pub mod http;
pub mod invoice;
