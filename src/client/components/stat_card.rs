use dioxus::prelude::*;

#[component]
pub fn StatCard(title: &'static str, value: String, description: Option<&'static str>) -> Element {
    rsx!(
        div { class: "stat bg-base-100 shadow-sm rounded-box",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value", "{value}" }
            if let Some(description) = description {
                div { class: "stat-desc", "{description}" }
            }
        }
    )
}
