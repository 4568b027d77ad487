//! Declarative test builder.
//!
//! `TestBuilder` queues tables and fixture records, then creates them all against a
//! fresh in-memory database in `build()`.

use entity::{employee::EmployeeStatus, invoice::InvoiceStatus};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Tables are created before any fixture is inserted, so fixtures may be queued in
/// any order relative to `with_table` calls.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    // Database fixtures to insert
    employees: Vec<(i32, String, EmployeeStatus)>, // (employee_number, name, status)
    applicants: Vec<(String, String)>,             // (name, email)
    invoices: Vec<(String, f64, InvoiceStatus)>,   // (employee, amount, status)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            employees: Vec::new(),
            applicants: Vec::new(),
            invoices: Vec::new(),
        }
    }

    /// Create the employee, applicant and invoice tables.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use staffdesk_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), staffdesk_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Employee)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an employee record during `build()`.
    ///
    /// # Arguments
    /// - `employee_number` - Numeric part of the `EMPnnn` code
    /// - `name` - Employee name
    /// - `status` - Employment status
    pub fn with_employee(mut self, employee_number: i32, name: &str, status: EmployeeStatus) -> Self {
        self.employees
            .push((employee_number, name.to_string(), status));
        self
    }

    /// Insert an applicant record during `build()`.
    ///
    /// Applicants are inserted in call order, each stamped with the current time.
    pub fn with_applicant(mut self, name: &str, email: &str) -> Self {
        self.applicants.push((name.to_string(), email.to_string()));
        self
    }

    /// Insert an invoice record during `build()`.
    pub fn with_invoice(mut self, employee: &str, amount: f64, status: InvoiceStatus) -> Self {
        self.invoices.push((employee.to_string(), amount, status));
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with all tables and fixtures created
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_all_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Employee),
                schema.create_table_from_entity(entity::prelude::Applicant),
                schema.create_table_from_entity(entity::prelude::Invoice),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (employee_number, name, status) in self.employees {
            setup
                .employee()
                .insert_employee_with_status(employee_number, &name, status)
                .await?;
        }

        for (name, email) in self.applicants {
            setup.applicant().insert_applicant(&name, &email).await?;
        }

        for (employee, amount, status) in self.invoices {
            setup
                .invoice()
                .insert_invoice(&employee, amount, status)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn test_builder_creates_all_tables() {
        let result = TestBuilder::new().with_all_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_inserts_fixtures() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_employee(1, "Ada Lovelace", EmployeeStatus::Active)
            .with_employee(2, "Alan Turing", EmployeeStatus::Inactive)
            .with_applicant("Grace Hopper", "grace@example.com")
            .with_invoice("Ada Lovelace", 120.5, InvoiceStatus::Pending)
            .build()
            .await?;

        assert_eq!(entity::prelude::Employee::find().count(&test.db).await?, 2);
        assert_eq!(entity::prelude::Applicant::find().count(&test.db).await?, 1);
        assert_eq!(entity::prelude::Invoice::find().count(&test.db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_builder_fails_without_tables() {
        let result = TestBuilder::new()
            .with_employee(1, "Ada Lovelace", EmployeeStatus::Active)
            .build()
            .await;
        assert!(result.is_err());
    }
}
