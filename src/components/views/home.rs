use crate::components::{Icon, PlaylistSignal};
use dioxus::prelude::*;

struct Advantage {
    title: &'static str,
    body: &'static str,
}

const ADVANTAGES: [Advantage; 3] = [
    Advantage {
        title: "Rápido",
        body: "Do pedido à entrega sem filas e sem complicação.",
    },
    Advantage {
        title: "Próximo",
        body: "Conectamos você a quem está perto e pronto para ajudar.",
    },
    Advantage {
        title: "Confiável",
        body: "Avaliações reais e acompanhamento em cada etapa.",
    },
];

const TEAM: [&str; 4] = ["Ana", "Bruno", "Carla", "Diego"];

#[component]
pub fn HomeView() -> Element {
    let playlist = use_context::<PlaylistSignal>().0;
    let has_playlist = !playlist.read().is_empty();

    rsx! {
        section { id: "sobre", class: "home-hero",
            h1 { class: "home-title", "Friendly" }
            p { class: "home-lead",
                "Um jeito simples e amigável de resolver o seu dia a dia."
            }
            a { href: "#musica", class: "home-cta",
                Icon { name: "music".to_string(), class: "icon-sm".to_string() }
                if has_playlist {
                    "Continuar ouvindo"
                } else {
                    "Escolher uma playlist"
                }
            }
        }

        section { id: "vantagens", class: "home-section",
            h2 { class: "section-title", "Vantagens" }
            div { class: "home-cards",
                for advantage in ADVANTAGES.iter() {
                    article { key: "{advantage.title}", class: "home-card",
                        h3 { "{advantage.title}" }
                        p { "{advantage.body}" }
                    }
                }
            }
        }

        section { id: "video-pitch", class: "home-section",
            h2 { class: "section-title", "Vídeo Pitch" }
            div { class: "home-video",
                Icon { name: "youtube".to_string(), class: "icon-xl".to_string() }
                p { "Em breve." }
            }
        }

        section { id: "equipe", class: "home-section",
            h2 { class: "section-title", "Equipe" }
            ul { class: "home-team",
                for member in TEAM {
                    li { key: "{member}", class: "home-team-member", "{member}" }
                }
            }
        }
    }
}
