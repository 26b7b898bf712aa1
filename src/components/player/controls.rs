use crate::components::{Icon, SiteWidget};
use crate::player::format_time;
use dioxus::prelude::*;

#[component]
pub(super) fn ShuffleButton(shuffled: bool, disabled: bool) -> Element {
    let mut widget = use_context::<Signal<SiteWidget>>();
    let icon = if shuffled { "shuffle" } else { "arrows-right" };

    rsx! {
        button {
            id: "shuffle-btn",
            r#type: "button",
            class: if shuffled { "control-btn control-btn-active" } else { "control-btn" },
            aria_pressed: "{shuffled}",
            title: "Aleatório",
            disabled: disabled,
            onclick: move |_| widget.write().toggle_shuffle(),
            Icon { name: icon.to_string(), class: "icon-md".to_string() }
        }
    }
}

#[component]
pub(super) fn PrevButton(disabled: bool) -> Element {
    let mut widget = use_context::<Signal<SiteWidget>>();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "control-btn",
            title: "Anterior",
            disabled: disabled,
            onclick: move |_| widget.write().previous(),
            Icon { name: "prev".to_string(), class: "icon-md".to_string() }
        }
    }
}

/// `pending` marks a toggle the player has not confirmed yet.
#[component]
pub(super) fn PlayPauseButton(playing: bool, pending: bool, disabled: bool) -> Element {
    let mut widget = use_context::<Signal<SiteWidget>>();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: if pending { "control-btn control-btn-primary control-btn-pending" } else { "control-btn control-btn-primary" },
            aria_busy: "{pending}",
            title: if playing { "Pausar" } else { "Tocar" },
            disabled: disabled,
            onclick: move |_| widget.write().toggle_play_pause(),
            if playing {
                Icon { name: "pause".to_string(), class: "icon-lg".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "icon-lg".to_string() }
            }
        }
    }
}

#[component]
pub(super) fn NextButton(disabled: bool) -> Element {
    let mut widget = use_context::<Signal<SiteWidget>>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "control-btn",
            title: "Próxima",
            disabled: disabled,
            onclick: move |_| widget.write().next(),
            Icon { name: "next".to_string(), class: "icon-md".to_string() }
        }
    }
}

/// Mute toggle; remembers the last volume for unmuting.
#[component]
pub(super) fn MuteButton(muted: bool, disabled: bool) -> Element {
    let mut widget = use_context::<Signal<SiteWidget>>();
    let icon = if muted { "volume-mute" } else { "volume" };

    rsx! {
        button {
            id: "mute-btn",
            r#type: "button",
            class: "control-btn",
            title: if muted { "Ativar som" } else { "Silenciar" },
            disabled: disabled,
            onclick: move |_| widget.write().toggle_mute(),
            Icon { name: icon.to_string(), class: "icon-sm".to_string() }
        }
    }
}

/// Elapsed/total labels and the seek slider.
#[component]
pub(super) fn TimeBar(current_time: f64, duration: f64, disabled: bool) -> Element {
    let mut widget = use_context::<Signal<SiteWidget>>();
    let max = duration.max(0.0).floor();
    let value = current_time.max(0.0).floor().min(max);
    let elapsed = format_time(current_time);
    let total = format_time(duration);

    rsx! {
        div { class: "music_time_2",
            div { class: "music_time_labels",
                span { "{elapsed}" }
                span { "{total}" }
            }
            div { class: "wrapper2",
                input {
                    class: "slide_time",
                    r#type: "range",
                    min: "0",
                    max: "{max}",
                    value: "{value}",
                    disabled: disabled,
                    oninput: move |e: FormEvent| {
                        if let Ok(seconds) = e.value().parse::<f64>() {
                            widget.write().seek(seconds);
                        }
                    },
                }
            }
        }
    }
}
