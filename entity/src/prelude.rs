pub use super::applicant::Entity as Applicant;
pub use super::employee::Entity as Employee;
pub use super::invoice::Entity as Invoice;
