use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Prefix of the human-facing employee code, e.g. `EMP001`
pub const EMPLOYEE_ID_PREFIX: &str = "EMP";

/// Formats a sequential employee number as its employee code.
///
/// Numbers are zero-padded to three digits; larger numbers keep all their digits
/// (`7` -> `EMP007`, `1000` -> `EMP1000`).
pub fn format_employee_id(number: i32) -> String {
    format!("{}{:03}", EMPLOYEE_ID_PREFIX, number)
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 2] = [EmployeeStatus::Active, EmployeeStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Parses the exact wire name of a status, as used by form selects
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == name)
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EmployeeDto {
    /// Database identifier used in `/api/employees/{id}` routes
    pub id: i32,
    /// Sequential employee code such as `EMP001`
    pub employee_id: String,
    pub name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub status: EmployeeStatus,
    pub joining_date: NaiveDate,
}

/// Request body for creating an employee
///
/// `status` defaults to `Active` and `joining_date` to the current date when omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateEmployeeDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
}

/// Request body for updating an employee, omitted fields are left unchanged
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateEmployeeDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
}
