use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{
    model::invoice::{InvoiceStatus, UpdateInvoiceDto},
    server::model::db::InvoiceModel,
};

/// Validated values for a new invoice.
pub struct NewInvoice {
    pub employee: String,
    pub amount: f64,
    pub issue_date: chrono::NaiveDate,
    pub due_date: chrono::NaiveDate,
    pub status: InvoiceStatus,
}

pub struct InvoiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvoiceRepository<'a> {
    /// Creates a new instance of [`InvoiceRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, invoice: NewInvoice) -> Result<InvoiceModel, DbErr> {
        let invoice = entity::invoice::ActiveModel {
            employee: ActiveValue::Set(invoice.employee),
            amount: ActiveValue::Set(invoice.amount),
            issue_date: ActiveValue::Set(invoice.issue_date),
            due_date: ActiveValue::Set(invoice.due_date),
            status: ActiveValue::Set(invoice.status.into()),
            ..Default::default()
        };

        invoice.insert(self.db).await
    }

    /// Gets all invoices, most recently created first
    pub async fn get_all(&self) -> Result<Vec<InvoiceModel>, DbErr> {
        entity::prelude::Invoice::find()
            .order_by_desc(entity::invoice::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<InvoiceModel>, DbErr> {
        entity::prelude::Invoice::find_by_id(id).one(self.db).await
    }

    /// Applies the fields present in `changes` to an invoice
    ///
    /// Returns `None` if no invoice exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        changes: UpdateInvoiceDto,
    ) -> Result<Option<InvoiceModel>, DbErr> {
        let Some(invoice) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut invoice = invoice.into_active_model();

        if let Some(employee) = changes.employee {
            invoice.employee = ActiveValue::Set(employee);
        }
        if let Some(amount) = changes.amount {
            invoice.amount = ActiveValue::Set(amount);
        }
        if let Some(issue_date) = changes.issue_date {
            invoice.issue_date = ActiveValue::Set(issue_date);
        }
        if let Some(due_date) = changes.due_date {
            invoice.due_date = ActiveValue::Set(due_date);
        }
        if let Some(status) = changes.status {
            invoice.status = ActiveValue::Set(status.into());
        }

        if !invoice.is_changed() {
            return self.get_by_id(id).await;
        }

        invoice.update(self.db).await.map(Some)
    }

    /// Deletes an invoice
    ///
    /// Check [`DeleteResult::rows_affected`] to learn whether the invoice existed.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Invoice::delete_by_id(id).exec(self.db).await
    }
}
