use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaTrash};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{EmployeeStatusBadge, ErrorAlert, Page},
        util::employee::{create_employee, delete_employee, get_employees},
    },
    model::employee::{CreateEmployeeDto, EmployeeDto, EmployeeStatus},
};

#[component]
pub fn Employees() -> Element {
    let mut status_filter = use_signal(|| None::<EmployeeStatus>);
    let mut refresh = use_signal(|| 0_u32);
    let mut error = use_signal(|| None::<String>);

    let employees = use_resource(move || {
        let status = status_filter();
        refresh();

        async move { get_employees(status).await }
    });

    let (employee_list, load_error) = match &*employees.read_unchecked() {
        Some(Ok(employees)) => (employees.clone(), None),
        Some(Err(err)) => (Vec::new(), Some(err.clone())),
        None => (Vec::new(), None),
    };

    let on_delete = move |id: i32| {
        spawn(async move {
            match delete_employee(id).await {
                Ok(_) => *refresh.write() += 1,
                Err(err) => error.set(Some(err)),
            }
        });
    };

    rsx!(
        Title { "Employees | StaffDesk" }
        Page {
            div { class: "flex justify-between items-center",
                h1 { class: "text-2xl font-semibold", "Employees" }
                select {
                    class: "select select-bordered w-48",
                    onchange: move |evt| status_filter.set(EmployeeStatus::from_name(&evt.value())),
                    option { value: "", "All statuses" }
                    for status in EmployeeStatus::ALL {
                        option { value: "{status}", "{status}" }
                    }
                }
            }
            ErrorAlert { message: error().or(load_error) }
            EmployeeForm {
                on_created: move |_| {
                    error.set(None);
                    *refresh.write() += 1;
                },
                on_error: move |err| error.set(Some(err)),
            }
            EmployeeTable { employees: employee_list, on_delete: on_delete }
        }
    )
}

#[component]
fn EmployeeForm(on_created: EventHandler<EmployeeDto>, on_error: EventHandler<String>) -> Element {
    let mut name = use_signal(String::new);
    let mut position = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut salary = use_signal(String::new);
    let mut status = use_signal(EmployeeStatus::default);

    let non_empty = |value: String| {
        let value = value.trim().to_string();
        (!value.is_empty()).then_some(value)
    };

    let submit = move |_| {
        let salary_input = salary();
        let salary_amount = match salary_input.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    on_error.call(format!("Salary \"{}\" is not a number", raw));
                    return;
                }
            },
        };

        let employee = CreateEmployeeDto {
            name: name(),
            position: non_empty(position()),
            department: non_empty(department()),
            salary: salary_amount,
            status: Some(status()),
            joining_date: None,
        };

        spawn(async move {
            match create_employee(&employee).await {
                Ok(created) => {
                    name.set(String::new());
                    position.set(String::new());
                    department.set(String::new());
                    salary.set(String::new());
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
                    placeholder: "Name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Position",
                    value: "{position}",
                    oninput: move |evt| position.set(evt.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Department",
                    value: "{department}",
                    oninput: move |evt| department.set(evt.value()),
                }
                input {
                    class: "input input-bordered w-36",
                    placeholder: "Salary",
                    r#type: "number",
                    min: "0",
                    value: "{salary}",
                    oninput: move |evt| salary.set(evt.value()),
                }
                select {
                    class: "select select-bordered w-36",
                    onchange: move |evt| {
                        if let Some(selected) = EmployeeStatus::from_name(&evt.value()) {
                            status.set(selected);
                        }
                    },
                    for option_status in EmployeeStatus::ALL {
                        option {
                            value: "{option_status}",
                            selected: option_status == status(),
                            "{option_status}"
                        }
                    }
                }
                button { class: "btn btn-primary flex gap-2", onclick: submit,
                    Icon { width: 16, height: 16, icon: FaPlus }
                    "Add employee"
                }
            }
        }
    )
}

#[component]
fn EmployeeTable(employees: Vec<EmployeeDto>, on_delete: EventHandler<i32>) -> Element {
    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Position" }
                        th { "Department" }
                        th { "Salary" }
                        th { "Joined" }
                        th { "Status" }
                        th {}
                    }
                }
                tbody {
                    for employee in employees {
                        tr { key: "{employee.id}",
                            td { "{employee.employee_id}" }
                            td { "{employee.name}" }
                            td { {employee.position.clone().unwrap_or_default()} }
                            td { {employee.department.clone().unwrap_or_default()} }
                            td { {employee.salary.map(|s| format!("{:.2}", s)).unwrap_or_default()} }
                            td { "{employee.joining_date}" }
                            td { EmployeeStatusBadge { status: employee.status } }
                            td {
                                button {
                                    class: "btn btn-ghost btn-sm",
                                    onclick: move |_| on_delete.call(employee.id),
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
