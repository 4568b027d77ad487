//! Dashboard figures derived from the record lists returned by the API.

use crate::model::{
    employee::{EmployeeDto, EmployeeStatus},
    invoice::{InvoiceDto, InvoiceStatus},
};

/// Headcount and invoice totals shown on the dashboard cards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    pub total_employees: usize,
    pub active_employees: usize,
    pub inactive_employees: usize,
    pub open_applicants: usize,
    pub pending_amount: f64,
    pub overdue_amount: f64,
}

impl DashboardSummary {
    pub fn new(employees: &[EmployeeDto], applicant_count: usize, invoices: &[InvoiceDto]) -> Self {
        let active_employees = employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::Active)
            .count();

        let total_for = |status: InvoiceStatus| -> f64 {
            invoices
                .iter()
                .filter(|i| i.status == status)
                .map(|i| i.amount)
                .sum()
        };

        Self {
            total_employees: employees.len(),
            active_employees,
            inactive_employees: employees.len() - active_employees,
            open_applicants: applicant_count,
            pending_amount: total_for(InvoiceStatus::Pending),
            overdue_amount: total_for(InvoiceStatus::Overdue),
        }
    }
}

/// Most recently joined employees first, at most `limit` of them.
///
/// Employees joining on the same day are ordered by employee ID, highest first.
pub fn recent_employees(employees: &[EmployeeDto], limit: usize) -> Vec<EmployeeDto> {
    let mut recent = employees.to_vec();
    recent.sort_by(|a, b| {
        b.joining_date
            .cmp(&a.joining_date)
            .then_with(|| b.id.cmp(&a.id))
    });
    recent.truncate(limit);
    recent
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::employee::format_employee_id;

    fn employee(id: i32, status: EmployeeStatus, day: u32) -> EmployeeDto {
        EmployeeDto {
            id,
            employee_id: format_employee_id(id),
            name: format!("Employee {}", id),
            position: None,
            department: None,
            salary: None,
            status,
            joining_date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
        }
    }

    fn invoice(id: i32, amount: f64, status: InvoiceStatus) -> InvoiceDto {
        InvoiceDto {
            id,
            employee: "Ada Lovelace".to_string(),
            amount,
            issue_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            status,
        }
    }

    #[test]
    fn summary_counts_and_totals() {
        let employees = vec![
            employee(1, EmployeeStatus::Active, 1),
            employee(2, EmployeeStatus::Inactive, 2),
            employee(3, EmployeeStatus::Active, 3),
        ];
        let invoices = vec![
            invoice(1, 100.0, InvoiceStatus::Pending),
            invoice(2, 50.5, InvoiceStatus::Pending),
            invoice(3, 20.0, InvoiceStatus::Overdue),
            invoice(4, 999.0, InvoiceStatus::Paid),
        ];

        let summary = DashboardSummary::new(&employees, 4, &invoices);

        assert_eq!(summary.total_employees, 3);
        assert_eq!(summary.active_employees, 2);
        assert_eq!(summary.inactive_employees, 1);
        assert_eq!(summary.open_applicants, 4);
        assert_eq!(summary.pending_amount, 150.5);
        assert_eq!(summary.overdue_amount, 20.0);
    }

    #[test]
    fn recent_employees_newest_first() {
        let employees = vec![
            employee(1, EmployeeStatus::Active, 5),
            employee(2, EmployeeStatus::Active, 9),
            employee(3, EmployeeStatus::Active, 9),
            employee(4, EmployeeStatus::Active, 1),
        ];

        let ids: Vec<i32> = recent_employees(&employees, 3)
            .into_iter()
            .map(|e| e.id)
            .collect();

        assert_eq!(ids, vec![3, 2, 1]);
    }
}
