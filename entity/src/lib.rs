pub mod prelude;

pub mod applicant;
pub mod employee;
pub mod invoice;
