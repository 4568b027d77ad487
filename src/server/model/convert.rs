//! Conversions between SeaORM entity models and API DTOs.

use crate::{
    model::{
        applicant::ApplicantDto,
        employee::{format_employee_id, EmployeeDto, EmployeeStatus},
        invoice::{InvoiceDto, InvoiceStatus},
    },
    server::model::db::{ApplicantModel, EmployeeModel, InvoiceModel},
};

impl From<EmployeeStatus> for entity::employee::EmployeeStatus {
    fn from(status: EmployeeStatus) -> Self {
        match status {
            EmployeeStatus::Active => Self::Active,
            EmployeeStatus::Inactive => Self::Inactive,
        }
    }
}

impl From<entity::employee::EmployeeStatus> for EmployeeStatus {
    fn from(status: entity::employee::EmployeeStatus) -> Self {
        match status {
            entity::employee::EmployeeStatus::Active => Self::Active,
            entity::employee::EmployeeStatus::Inactive => Self::Inactive,
        }
    }
}

impl From<InvoiceStatus> for entity::invoice::InvoiceStatus {
    fn from(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Paid => Self::Paid,
            InvoiceStatus::Pending => Self::Pending,
            InvoiceStatus::Overdue => Self::Overdue,
        }
    }
}

impl From<entity::invoice::InvoiceStatus> for InvoiceStatus {
    fn from(status: entity::invoice::InvoiceStatus) -> Self {
        match status {
            entity::invoice::InvoiceStatus::Paid => Self::Paid,
            entity::invoice::InvoiceStatus::Pending => Self::Pending,
            entity::invoice::InvoiceStatus::Overdue => Self::Overdue,
        }
    }
}

impl From<EmployeeModel> for EmployeeDto {
    fn from(model: EmployeeModel) -> Self {
        Self {
            id: model.id,
            employee_id: format_employee_id(model.employee_number),
            name: model.name,
            position: model.position,
            department: model.department,
            salary: model.salary,
            status: model.status.into(),
            joining_date: model.joining_date,
        }
    }
}

impl From<ApplicantModel> for ApplicantDto {
    fn from(model: ApplicantModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            position: model.position,
            resume_url: model.resume_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<InvoiceModel> for InvoiceDto {
    fn from(model: InvoiceModel) -> Self {
        Self {
            id: model.id,
            employee: model.employee,
            amount: model.amount,
            issue_date: model.issue_date,
            due_date: model.due_date,
            status: model.status.into(),
        }
    }
}
