use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{EmployeeStatusBadge, ErrorAlert, Page, StatCard},
        util::{applicant::get_applicants, employee::get_employees, invoice::get_invoices},
    },
    model::summary::{recent_employees, DashboardSummary},
};

const RECENT_EMPLOYEE_LIMIT: usize = 5;

#[component]
pub fn Dashboard() -> Element {
    let employees = use_resource(|| async move { get_employees(None).await });
    let applicants = use_resource(|| async move { get_applicants("").await });
    let invoices = use_resource(|| async move { get_invoices().await });

    let employees = employees.read_unchecked();
    let applicants = applicants.read_unchecked();
    let invoices = invoices.read_unchecked();

    let (Some(employees), Some(applicants), Some(invoices)) =
        (&*employees, &*applicants, &*invoices)
    else {
        return rsx!(
            Title { "Dashboard | StaffDesk" }
            Page {
                div { class: "skeleton h-32 w-full" }
            }
        );
    };

    let error = [
        employees.as_ref().err(),
        applicants.as_ref().err(),
        invoices.as_ref().err(),
    ]
    .into_iter()
    .flatten()
    .next()
    .cloned();
    if let Some(err) = &error {
        tracing::error!("Failed to load dashboard data: {}", err);
    }

    let employees = employees.as_ref().map(Vec::as_slice).unwrap_or_default();
    let applicant_count = applicants.as_ref().map(Vec::len).unwrap_or_default();
    let invoices = invoices.as_ref().map(Vec::as_slice).unwrap_or_default();

    let summary = DashboardSummary::new(employees, applicant_count, invoices);
    let recent = recent_employees(employees, RECENT_EMPLOYEE_LIMIT);

    rsx!(
        Title { "Dashboard | StaffDesk" }
        Meta {
            name: "description",
            content: "Employee, hiring, and invoice overview."
        }
        Page {
            h1 { class: "text-2xl font-semibold", "Dashboard" }
            ErrorAlert { message: error }
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                StatCard { title: "Employees", value: summary.total_employees.to_string() }
                StatCard { title: "Active", value: summary.active_employees.to_string() }
                StatCard { title: "Inactive", value: summary.inactive_employees.to_string() }
                StatCard {
                    title: "Applicants",
                    value: summary.open_applicants.to_string(),
                    description: "Awaiting a decision"
                }
                StatCard { title: "Pending invoices", value: format!("{:.2}", summary.pending_amount) }
                StatCard { title: "Overdue invoices", value: format!("{:.2}", summary.overdue_amount) }
            }
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body",
                    h2 { class: "card-title", "Recently joined" }
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "ID" }
                                    th { "Name" }
                                    th { "Position" }
                                    th { "Department" }
                                    th { "Joined" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for employee in recent {
                                    tr { key: "{employee.id}",
                                        td { "{employee.employee_id}" }
                                        td { "{employee.name}" }
                                        td { {employee.position.clone().unwrap_or_default()} }
                                        td { {employee.department.clone().unwrap_or_default()} }
                                        td { "{employee.joining_date}" }
                                        td { EmployeeStatusBadge { status: employee.status } }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
