use entity::employee::EmployeeStatus;
use sea_orm::EntityTrait;

use crate::{error::TestError, fixtures::factory, model::EmployeeModel, TestContext};

impl TestContext {
    /// Access employee fixture methods.
    pub fn employee<'a>(&'a self) -> EmployeeFixtures<'a> {
        EmployeeFixtures { setup: self }
    }
}

pub struct EmployeeFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> EmployeeFixtures<'a> {
    /// Insert an active employee with the given sequential number.
    ///
    /// # Arguments
    /// - `employee_number` - Numeric part of the `EMPnnn` code, must be unique
    /// - `name` - Employee name
    ///
    /// # Returns
    /// - `Ok(EmployeeModel)` - The created employee record
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. duplicate number
    pub async fn insert_employee(
        &self,
        employee_number: i32,
        name: &str,
    ) -> Result<EmployeeModel, TestError> {
        self.insert_employee_with_status(employee_number, name, EmployeeStatus::Active)
            .await
    }

    /// Insert an employee with an explicit status.
    pub async fn insert_employee_with_status(
        &self,
        employee_number: i32,
        name: &str,
        status: EmployeeStatus,
    ) -> Result<EmployeeModel, TestError> {
        Ok(entity::prelude::Employee::insert(factory::mock_employee(
            employee_number,
            name,
            status,
        ))
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
