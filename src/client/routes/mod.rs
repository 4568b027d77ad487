pub mod dashboard;
pub mod employees;
pub mod hiring;
pub mod invoices;
pub mod not_found;

pub use dashboard::Dashboard;
pub use employees::Employees;
pub use hiring::Hiring;
pub use invoices::Invoices;
pub use not_found::NotFound;
