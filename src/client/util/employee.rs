use crate::{
    client::util::http::{delete_json, get_json, post_json},
    model::{
        api::MessageDto,
        employee::{CreateEmployeeDto, EmployeeDto, EmployeeStatus},
    },
};

/// Retrieve employees from the API, optionally only those with `status`
pub async fn get_employees(status: Option<EmployeeStatus>) -> Result<Vec<EmployeeDto>, String> {
    let url = match status {
        Some(status) => format!("/api/employees?status={}", status),
        None => "/api/employees".to_string(),
    };

    get_json(&url).await
}

pub async fn create_employee(employee: &CreateEmployeeDto) -> Result<EmployeeDto, String> {
    post_json("/api/employees", employee).await
}

pub async fn delete_employee(id: i32) -> Result<MessageDto, String> {
    delete_json(&format!("/api/employees/{}", id)).await
}
