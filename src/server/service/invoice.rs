use sea_orm::DatabaseConnection;

use crate::{
    model::invoice::{CreateInvoiceDto, InvoiceDto, UpdateInvoiceDto},
    server::{
        data::invoice::{InvoiceRepository, NewInvoice},
        error::{record::RecordError, Error},
        service::validate::{non_negative_amount, require, require_text},
    },
};

/// Service for invoices.
pub struct InvoiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvoiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new invoice.
    ///
    /// # Arguments
    /// - `invoice` - Invoice fields from the request body
    ///
    /// # Returns
    /// - `Ok(InvoiceDto)` - The stored invoice, status `Pending` unless provided
    /// - `Err(Error::RecordError)` - Employee blank, amount invalid or a date missing
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, invoice: CreateInvoiceDto) -> Result<InvoiceDto, Error> {
        let invoice = NewInvoice {
            employee: require_text("employee", &invoice.employee)?,
            amount: non_negative_amount("amount", require("amount", invoice.amount)?)?,
            issue_date: require("issue_date", invoice.issue_date)?,
            due_date: require("due_date", invoice.due_date)?,
            status: invoice.status.unwrap_or_default(),
        };

        let model = InvoiceRepository::new(self.db).create(invoice).await?;

        Ok(model.into())
    }

    /// Lists invoices, most recently created first.
    pub async fn get_all(&self) -> Result<Vec<InvoiceDto>, Error> {
        let invoices = InvoiceRepository::new(self.db).get_all().await?;

        Ok(invoices.into_iter().map(InvoiceDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<InvoiceDto, Error> {
        InvoiceRepository::new(self.db)
            .get_by_id(id)
            .await?
            .map(InvoiceDto::from)
            .ok_or_else(|| RecordError::InvoiceNotFound(id).into())
    }

    /// Applies a partial update after validating the fields present.
    pub async fn update(&self, id: i32, mut changes: UpdateInvoiceDto) -> Result<InvoiceDto, Error> {
        if let Some(employee) = &changes.employee {
            changes.employee = Some(require_text("employee", employee)?);
        }
        if let Some(amount) = changes.amount {
            non_negative_amount("amount", amount)?;
        }

        InvoiceRepository::new(self.db)
            .update(id, changes)
            .await?
            .map(InvoiceDto::from)
            .ok_or_else(|| RecordError::InvoiceNotFound(id).into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = InvoiceRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(RecordError::InvoiceNotFound(id).into());
        }

        Ok(())
    }
}
