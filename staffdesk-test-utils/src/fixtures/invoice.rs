use entity::invoice::InvoiceStatus;
use sea_orm::EntityTrait;

use crate::{error::TestError, fixtures::factory, model::InvoiceModel, TestContext};

impl TestContext {
    /// Access invoice fixture methods.
    pub fn invoice<'a>(&'a self) -> InvoiceFixtures<'a> {
        InvoiceFixtures { setup: self }
    }
}

pub struct InvoiceFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> InvoiceFixtures<'a> {
    /// Insert an invoice issued on [`factory::mock_date`] and due thirty days later.
    pub async fn insert_invoice(
        &self,
        employee: &str,
        amount: f64,
        status: InvoiceStatus,
    ) -> Result<InvoiceModel, TestError> {
        Ok(
            entity::prelude::Invoice::insert(factory::mock_invoice(employee, amount, status))
                .exec_with_returning(&self.setup.db)
                .await?,
        )
    }
}
