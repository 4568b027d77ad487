use sea_orm::DatabaseConnection;

use crate::{
    model::employee::{CreateEmployeeDto, EmployeeDto, EmployeeStatus, UpdateEmployeeDto},
    server::{
        data::employee::EmployeeRepository,
        error::{record::RecordError, Error},
        service::{
            retry::RetryContext,
            validate::{non_negative_amount, require_text},
        },
    },
};

/// Service for employee records and their sequential `EMPnnn` codes.
pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    /// Creates a new instance of EmployeeService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new employee under the next sequential number.
    ///
    /// Two concurrent creates may read the same highest number; the loser hits the unique
    /// constraint on `employee_number` and is retried with a freshly read number.
    ///
    /// # Arguments
    /// - `employee` - Employee fields from the request body
    ///
    /// # Returns
    /// - `Ok(EmployeeDto)` - The stored employee including its generated `employee_id`
    /// - `Err(Error::RecordError)` - Name blank or salary invalid
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn create(&self, mut employee: CreateEmployeeDto) -> Result<EmployeeDto, Error> {
        employee.name = require_text("name", &employee.name)?;
        if let Some(salary) = employee.salary {
            non_negative_amount("salary", salary)?;
        }

        let ctx = RetryContext::new();
        let db = self.db.clone();

        let model = ctx
            .execute_with_retry("create employee", || {
                let db = db.clone();
                let employee = employee.clone();

                Box::pin(async move {
                    let employee_repo = EmployeeRepository::new(&db);
                    let employee_number = employee_repo.next_employee_number().await?;

                    Ok(employee_repo.create(employee_number, employee).await?)
                })
            })
            .await?;

        Ok(model.into())
    }

    /// Lists employees ordered by employee number, optionally only those with `status`.
    pub async fn get_all(&self, status: Option<EmployeeStatus>) -> Result<Vec<EmployeeDto>, Error> {
        let employees = EmployeeRepository::new(self.db)
            .get_all(status.map(Into::into))
            .await?;

        Ok(employees.into_iter().map(EmployeeDto::from).collect())
    }

    /// Returns the employee or `RecordError::EmployeeNotFound`.
    pub async fn get_by_id(&self, id: i32) -> Result<EmployeeDto, Error> {
        EmployeeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .map(EmployeeDto::from)
            .ok_or_else(|| RecordError::EmployeeNotFound(id).into())
    }

    /// Applies a partial update after validating the fields present.
    ///
    /// # Returns
    /// - `Ok(EmployeeDto)` - The employee after the update
    /// - `Err(Error::RecordError)` - Employee missing, name blank or salary invalid
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, id: i32, mut changes: UpdateEmployeeDto) -> Result<EmployeeDto, Error> {
        if let Some(name) = &changes.name {
            changes.name = Some(require_text("name", name)?);
        }
        if let Some(salary) = changes.salary {
            non_negative_amount("salary", salary)?;
        }

        EmployeeRepository::new(self.db)
            .update(id, changes)
            .await?
            .map(EmployeeDto::from)
            .ok_or_else(|| RecordError::EmployeeNotFound(id).into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = EmployeeRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(RecordError::EmployeeNotFound(id).into());
        }

        Ok(())
    }
}
