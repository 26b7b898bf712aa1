//! Defines the routes of the site.

use dioxus::prelude::*;

use crate::components::views::{HomeView, NotFoundView};
use crate::components::AppShell;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        HomeView {},
        #[route("/:..segments")]
        NotFoundView { segments: Vec<String> },
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::HomeView {} => "Início",
        AppView::NotFoundView { .. } => "Página não encontrada",
    }
}
