use sea_orm_migration::{prelude::*, schema::*};

static IDX_EMPLOYEE_STATUS: &str = "idx_employee_status";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(integer_uniq(Employee::EmployeeNumber))
                    .col(string(Employee::Name))
                    .col(string_null(Employee::Position))
                    .col(string_null(Employee::Department))
                    .col(double_null(Employee::Salary))
                    .col(string_len(Employee::Status, 16).default("Active"))
                    .col(date(Employee::JoiningDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_EMPLOYEE_STATUS)
                    .table(Employee::Table)
                    .col(Employee::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMPLOYEE_STATUS)
                    .table(Employee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Employee {
    Table,
    Id,
    EmployeeNumber,
    Name,
    Position,
    Department,
    Salary,
    Status,
    JoiningDate,
}
