use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaPlus, FaTrash};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{ErrorAlert, Page},
        util::applicant::{create_applicant, delete_applicant, get_applicants},
    },
    model::applicant::{ApplicantDto, CreateApplicantDto},
};

#[component]
pub fn Hiring() -> Element {
    let mut query = use_signal(String::new);
    let mut refresh = use_signal(|| 0_u32);
    let mut error = use_signal(|| None::<String>);

    let applicants = use_resource(move || {
        let query = query();
        refresh();

        async move { get_applicants(&query).await }
    });

    let (applicant_list, load_error) = match &*applicants.read_unchecked() {
        Some(Ok(applicants)) => (applicants.clone(), None),
        Some(Err(err)) => (Vec::new(), Some(err.clone())),
        None => (Vec::new(), None),
    };

    let on_delete = move |id: i32| {
        spawn(async move {
            match delete_applicant(id).await {
                Ok(_) => *refresh.write() += 1,
                Err(err) => error.set(Some(err)),
            }
        });
    };

    rsx!(
        Title { "Hiring | StaffDesk" }
        Page {
            div { class: "flex justify-between items-center",
                h1 { class: "text-2xl font-semibold", "Hiring" }
                label { class: "input input-bordered flex items-center gap-2 w-72",
                    Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                    input {
                        class: "grow",
                        placeholder: "Search name or email",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                }
            }
            ErrorAlert { message: error().or(load_error) }
            ApplicantForm {
                on_created: move |_| {
                    error.set(None);
                    *refresh.write() += 1;
                },
                on_error: move |err| error.set(Some(err)),
            }
            ApplicantTable { applicants: applicant_list, on_delete: on_delete }
        }
    )
}

#[component]
fn ApplicantForm(on_created: EventHandler<ApplicantDto>, on_error: EventHandler<String>) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut position = use_signal(String::new);
    let mut resume_url = use_signal(String::new);

    let submit = move |_| {
        let applicant = CreateApplicantDto {
            name: name(),
            email: email(),
            phone: phone(),
            position: position(),
            resume_url: resume_url(),
        };

        spawn(async move {
            match create_applicant(&applicant).await {
                Ok(created) => {
                    for mut field in [name, email, phone, position, resume_url] {
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
                    placeholder: "Name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Phone",
                    value: "{phone}",
                    oninput: move |evt| phone.set(evt.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Position",
                    value: "{position}",
                    oninput: move |evt| position.set(evt.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Resume URL",
                    r#type: "url",
                    value: "{resume_url}",
                    oninput: move |evt| resume_url.set(evt.value()),
                }
                button { class: "btn btn-primary flex gap-2", onclick: submit,
                    Icon { width: 16, height: 16, icon: FaPlus }
                    "Add applicant"
                }
            }
        }
    )
}

#[component]
fn ApplicantTable(applicants: Vec<ApplicantDto>, on_delete: EventHandler<i32>) -> Element {
    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Phone" }
                        th { "Position" }
                        th { "Resume" }
                        th { "Applied" }
                        th {}
                    }
                }
                tbody {
                    for applicant in applicants {
                        tr { key: "{applicant.id}",
                            td { "{applicant.name}" }
                            td { "{applicant.email}" }
                            td { "{applicant.phone}" }
                            td { "{applicant.position}" }
                            td {
                                if !applicant.resume_url.is_empty() {
                                    a {
                                        class: "link",
                                        href: "{applicant.resume_url}",
                                        target: "_blank",
                                        "View"
                                    }
                                }
                            }
                            td { {applicant.created_at.format("%Y-%m-%d").to_string()} }
                            td {
                                button {
                                    class: "btn btn-ghost btn-sm",
                                    onclick: move |_| on_delete.call(applicant.id),
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
