use crate::components::AppView;
use dioxus::prelude::*;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "home-section not-found",
            h1 { class: "section-title", "Página não encontrada" }
            p { "Nada em /{path}." }
            Link { to: AppView::HomeView {}, class: "home-cta", "Voltar ao início" }
        }
    }
}
