use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Dashboard, Employees, Hiring, Invoices, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Dashboard {},

    #[route("/employees")]
    Employees {},

    #[route("/hiring")]
    Hiring {},

    #[route("/invoices")]
    Invoices {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
