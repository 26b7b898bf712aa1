use crate::components::{view_label, AppView, Footer, LoadingScreen, PlaylistForm, YoutubePlayer};
use crate::config::SiteConfig;
use crate::db::{default_store, load_playlist_id, save_playlist_id};
use crate::player::PlaylistId;
use crate::utils::sleep_ms;
use dioxus::prelude::*;
use tracing::{info, warn};

/// The selected playlist, shared between the intake form and the player.
#[derive(Clone, Copy)]
pub struct PlaylistSignal(pub Signal<PlaylistId>);

const NAV_LINKS: [(&str, &str); 4] = [
    ("#sobre", "Sobre"),
    ("#vantagens", "Vantagens"),
    ("#video-pitch", "Vídeo Pitch"),
    ("#equipe", "Equipe"),
];

#[component]
pub fn AppShell() -> Element {
    let config = use_context_provider(SiteConfig::default);
    let current_view = use_route::<AppView>();
    let mut loading = use_signal(|| true);
    let playlist = use_signal({
        let key = config.preference_key.clone();
        move || load_playlist_id(&default_store(), &key)
    });

    use_context_provider(|| PlaylistSignal(playlist));

    // Time-based splash, independent of the player.
    {
        let splash_ms = config.splash_ms;
        use_future(move || async move {
            sleep_ms(splash_ms).await;
            loading.set(false);
        });
    }

    // Save the playlist whenever it changes.
    {
        let key = config.preference_key.clone();
        use_effect(move || {
            let current = playlist();
            if current.is_empty() {
                return;
            }
            info!(playlist = %current, "playlist selected");
            if let Err(err) = save_playlist_id(&default_store(), &key, &current) {
                warn!(error = %err, "failed to save playlist preference");
            }
        });
    }

    let title = format!("{} | Friendly", view_label(&current_view));

    if loading() {
        return rsx! {
            document::Title { "{title}" }
            LoadingScreen {}
        };
    }

    rsx! {
        document::Title { "{title}" }
        div { class: "site",
            header { class: "site-header",
                Link { to: AppView::HomeView {}, class: "site-logo", "Friendly" }
                nav { class: "site-nav",
                    for (href, label) in NAV_LINKS {
                        a { href: "{href}", class: "site-nav-link", "{label}" }
                    }
                    a { href: "#musica", class: "site-nav-link", "Música" }
                }
            }
            main { class: "site-main", Outlet::<AppView> {} }
            section { id: "musica", class: "music-section",
                h2 { class: "section-title", "Música para acompanhar" }
                PlaylistForm {}
                YoutubePlayer {}
            }
            Footer {}
        }
    }
}
