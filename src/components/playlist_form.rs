use crate::components::{Icon, PlaylistSignal};
use crate::player::extract_playlist_id;
use crate::utils::alert;
use dioxus::prelude::*;
use tracing::debug;

/// Paste box for a playlist link. Only the `list` parameter is kept.
#[component]
pub fn PlaylistForm() -> Element {
    let mut playlist = use_context::<PlaylistSignal>().0;
    let mut input_url = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match extract_playlist_id(&input_url()) {
            Ok(id) => {
                error.set(None);
                input_url.set(String::new());
                if *playlist.peek() == id {
                    debug!(playlist = %id, "playlist unchanged");
                    return;
                }
                playlist.set(id);
            }
            Err(err) => {
                let message = err.to_string();
                alert(&message);
                error.set(Some(message));
            }
        }
    };

    rsx! {
        form { class: "playlist-form", onsubmit: on_submit,
            label { r#for: "playlist-url", class: "playlist-form-label",
                "Cole o link de uma playlist do YouTube Music"
            }
            div { class: "playlist-form-row",
                input {
                    id: "playlist-url",
                    r#type: "url",
                    class: "playlist-form-input",
                    placeholder: "https://music.youtube.com/playlist?list=...",
                    value: "{input_url}",
                    oninput: move |e: FormEvent| input_url.set(e.value()),
                }
                button { r#type: "submit", class: "playlist-form-submit",
                    Icon { name: "music".to_string(), class: "icon-sm".to_string() }
                    "Carregar"
                }
            }
            if let Some(message) = error() {
                p { class: "playlist-form-error", role: "alert", "{message}" }
            }
        }
    }
}
