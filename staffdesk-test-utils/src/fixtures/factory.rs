use chrono::{NaiveDate, NaiveDateTime, Utc};
use entity::{employee::EmployeeStatus, invoice::InvoiceStatus};
use sea_orm::ActiveValue;

/// Fixed date used for joining, issue and due dates in fixtures.
pub fn mock_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default()
}

/// Create an unsaved employee with standard test values.
///
/// # Arguments
/// - `employee_number` - Numeric part of the `EMPnnn` code
/// - `name` - Employee name
/// - `status` - Employment status
///
/// # Returns
/// - `entity::employee::ActiveModel` - Active model ready to insert
pub fn mock_employee(
    employee_number: i32,
    name: &str,
    status: EmployeeStatus,
) -> entity::employee::ActiveModel {
    entity::employee::ActiveModel {
        employee_number: ActiveValue::Set(employee_number),
        name: ActiveValue::Set(name.to_string()),
        position: ActiveValue::Set(Some("Engineer".to_string())),
        department: ActiveValue::Set(Some("Engineering".to_string())),
        salary: ActiveValue::Set(Some(50_000.0)),
        status: ActiveValue::Set(status),
        joining_date: ActiveValue::Set(mock_date()),
        ..Default::default()
    }
}

/// Create an unsaved applicant stamped with the provided creation time.
pub fn mock_applicant(
    name: &str,
    email: &str,
    created_at: NaiveDateTime,
) -> entity::applicant::ActiveModel {
    entity::applicant::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        email: ActiveValue::Set(email.to_string()),
        phone: ActiveValue::Set("555-0100".to_string()),
        position: ActiveValue::Set("Engineer".to_string()),
        resume_url: ActiveValue::Set(String::new()),
        created_at: ActiveValue::Set(created_at),
        updated_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
}

/// Create an unsaved invoice due thirty days after [`mock_date`].
pub fn mock_invoice(
    employee: &str,
    amount: f64,
    status: InvoiceStatus,
) -> entity::invoice::ActiveModel {
    let issue_date = mock_date();

    entity::invoice::ActiveModel {
        employee: ActiveValue::Set(employee.to_string()),
        amount: ActiveValue::Set(amount),
        issue_date: ActiveValue::Set(issue_date),
        due_date: ActiveValue::Set(issue_date + chrono::Duration::days(30)),
        status: ActiveValue::Set(status),
        ..Default::default()
    }
}

/// Current UTC time without offset, as stored in timestamp columns.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
