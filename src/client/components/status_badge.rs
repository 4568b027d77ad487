use dioxus::prelude::*;

use crate::model::{employee::EmployeeStatus, invoice::InvoiceStatus};

#[component]
pub fn EmployeeStatusBadge(status: EmployeeStatus) -> Element {
    let class = match status {
        EmployeeStatus::Active => "badge-success",
        EmployeeStatus::Inactive => "badge-ghost",
    };

    rsx!(span { class: "badge {class}", "{status}" })
}

#[component]
pub fn InvoiceStatusBadge(status: InvoiceStatus) -> Element {
    let class = match status {
        InvoiceStatus::Paid => "badge-success",
        InvoiceStatus::Pending => "badge-warning",
        InvoiceStatus::Overdue => "badge-error",
    };

    rsx!(span { class: "badge {class}", "{status}" })
}
