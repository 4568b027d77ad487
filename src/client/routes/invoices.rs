use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaPlus, FaTrash};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{ErrorAlert, InvoiceStatusBadge, Page},
        util::invoice::{create_invoice, delete_invoice, get_invoices, set_invoice_status},
    },
    model::invoice::{CreateInvoiceDto, InvoiceDto, InvoiceStatus},
};

#[component]
pub fn Invoices() -> Element {
    let mut refresh = use_signal(|| 0_u32);
    let mut error = use_signal(|| None::<String>);

    let invoices = use_resource(move || {
        refresh();

        async move { get_invoices().await }
    });

    let (invoice_list, load_error) = match &*invoices.read_unchecked() {
        Some(Ok(invoices)) => (invoices.clone(), None),
        Some(Err(err)) => (Vec::new(), Some(err.clone())),
        None => (Vec::new(), None),
    };

    let on_mark_paid = move |id: i32| {
        spawn(async move {
            match set_invoice_status(id, InvoiceStatus::Paid).await {
                Ok(_) => *refresh.write() += 1,
                Err(err) => error.set(Some(err)),
            }
        });
    };

    let on_delete = move |id: i32| {
        spawn(async move {
            match delete_invoice(id).await {
                Ok(_) => *refresh.write() += 1,
                Err(err) => error.set(Some(err)),
            }
        });
    };

    rsx!(
        Title { "Invoices | StaffDesk" }
        Page {
            h1 { class: "text-2xl font-semibold", "Invoices" }
            ErrorAlert { message: error().or(load_error) }
            InvoiceForm {
                on_created: move |_| {
                    error.set(None);
                    *refresh.write() += 1;
                },
                on_error: move |err| error.set(Some(err)),
            }
            InvoiceTable {
                invoices: invoice_list,
                on_mark_paid: on_mark_paid,
                on_delete: on_delete,
            }
        }
    )
}

#[component]
fn InvoiceForm(on_created: EventHandler<InvoiceDto>, on_error: EventHandler<String>) -> Element {
    let mut employee = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut issue_date = use_signal(String::new);
    let mut due_date = use_signal(String::new);

    // Empty or unparseable dates are sent as missing
    let parse_date = |value: String| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok();

    let submit = move |_| {
        let amount_input = amount();
        let amount_value = match amount_input.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    on_error.call(format!("Amount \"{}\" is not a number", raw));
                    return;
                }
            },
        };

        let invoice = CreateInvoiceDto {
            employee: employee(),
            amount: amount_value,
            issue_date: parse_date(issue_date()),
            due_date: parse_date(due_date()),
            status: None,
        };

        spawn(async move {
            match create_invoice(&invoice).await {
                Ok(created) => {
                    for mut field in [employee, amount, issue_date, due_date] {
                        field.set(String::new());
                    }
                    on_created.call(created);
                }
                Err(err) => on_error.call(err),
            }
        });
    };

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body flex flex-row flex-wrap gap-2 items-end",
                input {
                    class: "input input-bordered",
                    placeholder: "Employee",
                    value: "{employee}",
                    oninput: move |evt| employee.set(evt.value()),
                }
                input {
                    class: "input input-bordered w-36",
                    placeholder: "Amount",
                    r#type: "number",
                    min: "0",
                    step: "0.01",
                    value: "{amount}",
                    oninput: move |evt| amount.set(evt.value()),
                }
                label { class: "flex flex-col text-xs gap-1",
                    "Issued"
                    input {
                        class: "input input-bordered",
                        r#type: "date",
                        value: "{issue_date}",
                        oninput: move |evt| issue_date.set(evt.value()),
                    }
                }
                label { class: "flex flex-col text-xs gap-1",
                    "Due"
                    input {
                        class: "input input-bordered",
                        r#type: "date",
                        value: "{due_date}",
                        oninput: move |evt| due_date.set(evt.value()),
                    }
                }
                button { class: "btn btn-primary flex gap-2", onclick: submit,
                    Icon { width: 16, height: 16, icon: FaPlus }
                    "Add invoice"
                }
            }
        }
    )
}

#[component]
fn InvoiceTable(
    invoices: Vec<InvoiceDto>,
    on_mark_paid: EventHandler<i32>,
    on_delete: EventHandler<i32>,
) -> Element {
    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Employee" }
                        th { "Amount" }
                        th { "Issued" }
                        th { "Due" }
                        th { "Status" }
                        th {}
                    }
                }
                tbody {
                    for invoice in invoices {
                        tr { key: "{invoice.id}",
                            td { "{invoice.employee}" }
                            td { {format!("{:.2}", invoice.amount)} }
                            td { "{invoice.issue_date}" }
                            td { "{invoice.due_date}" }
                            td { InvoiceStatusBadge { status: invoice.status } }
                            td { class: "flex gap-1",
                                if invoice.status != InvoiceStatus::Paid {
                                    button {
                                        class: "btn btn-ghost btn-sm",
                                        title: "Mark paid",
                                        onclick: move |_| on_mark_paid.call(invoice.id),
                                        Icon { width: 14, height: 14, icon: FaCheck }
                                    }
                                }
                                button {
                                    class: "btn btn-ghost btn-sm",
                                    title: "Delete",
                                    onclick: move |_| on_delete.call(invoice.id),
                                    Icon { width: 14, height: 14, icon: FaTrash }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
