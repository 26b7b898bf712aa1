use dioxus::prelude::*;

mod components;
mod config;
mod db;
mod player;
mod utils;
mod youtube;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#1f1b2e" }
        document::Meta {
            name: "description",
            content: "Friendly: um jeito simples e amigável de resolver o seu dia a dia.",
        }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
