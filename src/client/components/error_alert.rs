use dioxus::prelude::*;

/// Shows the message of a failed API call, nothing when `message` is `None`.
#[component]
pub fn ErrorAlert(message: Option<String>) -> Element {
    rsx!(
        if let Some(message) = message {
            div { role: "alert", class: "alert alert-error",
                span { "{message}" }
            }
        }
    )
}
