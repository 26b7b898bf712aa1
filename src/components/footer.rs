use crate::components::Icon;
use dioxus::prelude::*;

const COMPANY_LINKS: [(&str, &str, &str); 4] = [
    ("#sobre", "Sobre", "Ir para a seção 'Sobre'"),
    ("#vantagens", "Vantagens", "Ir para a seção 'Vantagens'"),
    ("#video-pitch", "Vídeo Pitch", "Ir para a seção 'Vídeo Pitch'"),
    ("#equipe", "Equipe", "Ir para a seção 'Equipe'"),
];

// (icon, label, aria label)
const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("instagram", "Instagram", "Ir para o perfil do Instagram de @Vapt-Vupt"),
    ("youtube", "Youtube", "Ir para o canal do Youtube de @Vapt-Vupt"),
    ("github", "GitHub", "Ir para o perfil do GitHub de @Vapt-Vupt"),
];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "footer-links",
                div { class: "footer-columns",
                    div { class: "sitemap",
                        p { class: "sitemap-title", "Empresa" }
                        for (href, label, aria) in COMPANY_LINKS {
                            a {
                                key: "{href}",
                                href: "{href}",
                                class: "footer-link",
                                aria_label: "{aria}",
                                "{label}"
                            }
                        }
                    }
                    div { class: "sitemap",
                        p { class: "sitemap-title", "Links" }
                        for (_, label, aria) in SOCIAL_LINKS {
                            a {
                                key: "{label}",
                                href: "#",
                                class: "footer-link",
                                aria_label: "{aria}",
                                "{label}"
                            }
                        }
                    }
                }
                div { class: "footer-social",
                    for (icon, label, aria) in SOCIAL_LINKS {
                        a {
                            key: "{icon}",
                            href: "#",
                            class: "footer-social-link",
                            title: "{label}",
                            aria_label: "{aria}",
                            Icon { name: icon.to_string(), class: "icon-sm".to_string() }
                        }
                    }
                }
            }
            div { class: "footer-bottom",
                span { class: "footer-logo", "Friendly" }
                a { href: "#sobre", class: "footer-copyright", "© 2024 FRIENDLY" }
            }
        }
    }
}
