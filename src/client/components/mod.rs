pub mod error_alert;
pub mod navbar;
pub mod page;
pub mod stat_card;
pub mod status_badge;

pub use error_alert::ErrorAlert;
pub use navbar::Navbar;
pub use page::Page;
pub use stat_card::StatCard;
pub use status_badge::{EmployeeStatusBadge, InvoiceStatusBadge};
