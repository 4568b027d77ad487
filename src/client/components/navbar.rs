use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChartLine, FaFileInvoiceDollar, FaUserPlus, FaUsers};
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Dashboard {}, class: "flex items-center gap-2",
                    p { class: "text-xl", "StaffDesk" }
                    p { class: "text-xs", "v{VERSION}" }
                }
            }
            div {
                class: "navbar-center",
                ul { class: "menu menu-horizontal gap-1",
                    NavLink { to: Route::Dashboard {}, label: "Dashboard",
                        Icon { width: 16, height: 16, icon: FaChartLine }
                    }
                    NavLink { to: Route::Employees {}, label: "Employees",
                        Icon { width: 16, height: 16, icon: FaUsers }
                    }
                    NavLink { to: Route::Hiring {}, label: "Hiring",
                        Icon { width: 16, height: 16, icon: FaUserPlus }
                    }
                    NavLink { to: Route::Invoices {}, label: "Invoices",
                        Icon { width: 16, height: 16, icon: FaFileInvoiceDollar }
                    }
                }
            }
            div {
                class: "navbar-end",
                a { href: "/api/docs",
                    button { class: "btn btn-outline btn-sm", "API Docs" }
                }
            }
        }

        Outlet::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, label: &'static str, children: Element) -> Element {
    rsx!(
        li {
            Link { to: to, active_class: "menu-active", class: "flex gap-2 items-center",
                {children}
                "{label}"
            }
        }
    )
}
