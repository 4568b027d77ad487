use crate::{
    client::util::http::{delete_json, get_json, post_json, put_json},
    model::{
        api::MessageDto,
        invoice::{CreateInvoiceDto, InvoiceDto, InvoiceStatus, UpdateInvoiceDto},
    },
};

pub async fn get_invoices() -> Result<Vec<InvoiceDto>, String> {
    get_json("/api/invoice").await
}

pub async fn create_invoice(invoice: &CreateInvoiceDto) -> Result<InvoiceDto, String> {
    post_json("/api/invoice", invoice).await
}

/// Change only the status of an invoice
pub async fn set_invoice_status(id: i32, status: InvoiceStatus) -> Result<InvoiceDto, String> {
    let changes = UpdateInvoiceDto {
        status: Some(status),
        ..Default::default()
    };

    put_json(&format!("/api/invoice/{}", id), &changes).await
}

pub async fn delete_invoice(id: i32) -> Result<MessageDto, String> {
    delete_json(&format!("/api/invoice/{}", id)).await
}
