use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::employee::{CreateEmployeeDto, UpdateEmployeeDto},
    server::model::db::EmployeeModel,
};

pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    /// Creates a new instance of [`EmployeeRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the number following the highest employee number in use, or 1 for an empty table
    pub async fn next_employee_number(&self) -> Result<i32, DbErr> {
        let highest: Option<Option<i32>> = entity::prelude::Employee::find()
            .select_only()
            .column_as(entity::employee::Column::EmployeeNumber.max(), "max_number")
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(highest.flatten().unwrap_or(0) + 1)
    }

    /// Inserts an employee under the provided sequential number
    ///
    /// Status defaults to `Active` and the joining date to today (UTC) when omitted.
    pub async fn create(
        &self,
        employee_number: i32,
        employee: CreateEmployeeDto,
    ) -> Result<EmployeeModel, DbErr> {
        let employee = entity::employee::ActiveModel {
            employee_number: ActiveValue::Set(employee_number),
            name: ActiveValue::Set(employee.name),
            position: ActiveValue::Set(employee.position),
            department: ActiveValue::Set(employee.department),
            salary: ActiveValue::Set(employee.salary),
            status: ActiveValue::Set(employee.status.unwrap_or_default().into()),
            joining_date: ActiveValue::Set(
                employee
                    .joining_date
                    .unwrap_or_else(|| Utc::now().date_naive()),
            ),
            ..Default::default()
        };

        employee.insert(self.db).await
    }

    /// Gets all employees ordered by employee number, optionally filtered by status
    pub async fn get_all(
        &self,
        status: Option<entity::employee::EmployeeStatus>,
    ) -> Result<Vec<EmployeeModel>, DbErr> {
        let mut query = entity::prelude::Employee::find();

        if let Some(status) = status {
            query = query.filter(entity::employee::Column::Status.eq(status));
        }

        query
            .order_by_asc(entity::employee::Column::EmployeeNumber)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<EmployeeModel>, DbErr> {
        entity::prelude::Employee::find_by_id(id).one(self.db).await
    }

    /// Applies the fields present in `changes` to an employee
    ///
    /// Returns `None` if no employee exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        changes: UpdateEmployeeDto,
    ) -> Result<Option<EmployeeModel>, DbErr> {
        let Some(employee) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut employee = employee.into_active_model();

        if let Some(name) = changes.name {
            employee.name = ActiveValue::Set(name);
        }
        if let Some(position) = changes.position {
            employee.position = ActiveValue::Set(Some(position));
        }
        if let Some(department) = changes.department {
            employee.department = ActiveValue::Set(Some(department));
        }
        if let Some(salary) = changes.salary {
            employee.salary = ActiveValue::Set(Some(salary));
        }
        if let Some(status) = changes.status {
            employee.status = ActiveValue::Set(status.into());
        }
        if let Some(joining_date) = changes.joining_date {
            employee.joining_date = ActiveValue::Set(joining_date);
        }

        if !employee.is_changed() {
            return self.get_by_id(id).await;
        }

        employee.update(self.db).await.map(Some)
    }

    /// Deletes an employee
    ///
    /// Returns OK regardless of the employee existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Employee::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
