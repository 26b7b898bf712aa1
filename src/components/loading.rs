use crate::components::Icon;
use dioxus::prelude::*;

/// Splash shown while the page shell holds back the content.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div { class: "loading-screen", role: "status", aria_live: "polite",
            Icon { name: "loader".to_string(), class: "icon-xl".to_string() }
            p { class: "loading-label", "Carregando..." }
        }
    }
}
