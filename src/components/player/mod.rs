use crate::components::{Icon, PlaylistSignal};
use crate::config::SiteConfig;
use crate::player::{
    FailureReason, Generation, HandleConfig, HandleEvent, PlayerStatus, PlayerWidget,
    WidgetPhase,
};
use crate::utils::sleep_ms;
use crate::youtube::{load_iframe_api, YoutubeHandle};
use dioxus::core::Task;
use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::debug;

mod controls;

use controls::{MuteButton, NextButton, PlayPauseButton, PrevButton, ShuffleButton, TimeBar};

/// The widget as shared with the control components.
pub type SiteWidget = PlayerWidget<YoutubeHandle>;

#[component]
pub fn YoutubePlayer() -> Element {
    let config = use_context::<SiteConfig>();
    let playlist = use_context::<PlaylistSignal>().0;
    let mut widget = use_signal(|| SiteWidget::new(config.default_volume));
    let mut poll_task = use_signal(|| None::<Task>);
    let mut create_task = use_signal(|| None::<Task>);
    let mut ready_task = use_signal(|| None::<Task>);
    let mut retries = use_signal(|| 0u32);

    use_context_provider(|| widget);

    // Handle notifications arrive from JS callbacks; apply them on our own task.
    let events = use_coroutine(
        move |mut rx: UnboundedReceiver<(Generation, HandleEvent)>| async move {
            while let Some((generation, event)) = rx.next().await {
                widget.write().handle_event(generation, event);
            }
        },
    );

    // Rebuild the player whenever the playlist changes or a retry is requested.
    {
        let config = config.clone();
        use_effect(move || {
            let selected = playlist();
            let _ = retries();

            for task in [create_task.write().take(), ready_task.write().take()]
                .into_iter()
                .flatten()
            {
                task.cancel();
            }
            let generation = widget.write().reset(selected.clone());
            if selected.is_empty() {
                return;
            }

            let tx = events.tx();
            let host_id = config.player_host_id.clone();
            create_task.set(Some(spawn(async move {
                if let Err(err) = load_iframe_api().await {
                    widget
                        .write()
                        .fail(generation, FailureReason::Creation(err.to_string()));
                    return;
                }
                // Mounting clears the host, so a superseded load must not get that far.
                if !widget.peek().awaits_handle(generation) {
                    debug!(generation, "playlist changed while the player API loaded");
                    return;
                }
                let element_id = format!("{host_id}-{generation}");
                let on_event = move |event: HandleEvent| {
                    if tx.unbounded_send((generation, event)).is_err() {
                        debug!(?event, "player notification after unmount");
                    }
                };
                let created = YoutubeHandle::create(
                    &host_id,
                    &element_id,
                    &HandleConfig::for_playlist(selected),
                    on_event,
                );
                match created {
                    Ok(handle) => {
                        widget.write().attach(generation, handle);
                    }
                    Err(err) => widget
                        .write()
                        .fail(generation, FailureReason::Creation(err.to_string())),
                }
            })));

            let timeout_ms = config.ready_timeout_ms;
            ready_task.set(Some(spawn(async move {
                sleep_ms(timeout_ms).await;
                widget.write().expire_ready_wait(generation);
            })));
        });
    }

    // Poll position and length once per interval, only while playing.
    let playing = use_memo(move || {
        let widget = widget.read();
        (widget.status().is_playing, widget.generation())
    });
    {
        let interval_ms = config.poll_interval_ms;
        use_effect(move || {
            let (is_playing, generation) = playing();
            if let Some(task) = poll_task.write().take() {
                task.cancel();
            }
            if !is_playing {
                return;
            }
            poll_task.set(Some(spawn(async move {
                loop {
                    sleep_ms(interval_ms).await;
                    if !widget.peek().should_poll(generation) {
                        break;
                    }
                    widget.write().poll(generation);
                }
            })));
        });
    }

    use_drop(move || {
        if let Ok(mut widget) = widget.try_write() {
            widget.teardown();
        }
    });

    let (status, phase) = {
        let widget = widget.read();
        (widget.status().clone(), widget.phase().clone())
    };
    let has_playlist = !playlist.read().is_empty();
    let ready = phase.accepts_commands();
    let host_id = config.player_host_id.clone();
    let PlayerStatus {
        is_playing,
        pending,
        is_shuffled,
        volume,
        current_time,
        duration,
        title,
        artist,
        thumbnail_url,
        ..
    } = status.clone();
    let muted = status.is_muted();

    rsx! {
        div { class: "youtube-player",
            // Hidden host; the IFrame player is mounted inside it.
            div {
                id: "{host_id}",
                class: "player-host",
                style: "display: none",
                aria_hidden: "true",
            }

            {
                match phase {
                    WidgetPhase::Failed(reason) => {
                        let message = reason.message();
                        rsx! {
                            div { class: "player-notice player-notice-error", role: "alert",
                                Icon { name: "alert".to_string(), class: "icon-md".to_string() }
                                p { "{message}" }
                                button {
                                    r#type: "button",
                                    class: "player-retry",
                                    onclick: move |_| retries += 1,
                                    Icon { name: "refresh".to_string(), class: "icon-sm".to_string() }
                                    "Tentar novamente"
                                }
                            }
                        }
                    }
                    WidgetPhase::Uninitialized if !has_playlist => rsx! {
                        div { class: "player-notice",
                            Icon { name: "music".to_string(), class: "icon-md".to_string() }
                            p { "Nenhuma playlist selecionada." }
                        }
                    },
                    WidgetPhase::Uninitialized => rsx! {
                        div { class: "player-notice",
                            Icon { name: "loader".to_string(), class: "icon-md".to_string() }
                            p { "Carregando player..." }
                        }
                    },
                    _ => rsx! {},
                }
            }

            div { class: "thumbnail",
                if !thumbnail_url.is_empty() {
                    img {
                        src: "{thumbnail_url}",
                        alt: "Capa da faixa",
                        class: "thumbnail_img",
                    }
                }
            }
            div { class: "musicinfo",
                h2 { "{title}" }
                p { "{artist}" }
            }

            div { class: "music_controls",
                div { class: "music_time",
                    div { class: "controls",
                        ShuffleButton { shuffled: is_shuffled, disabled: !ready }
                        PrevButton { disabled: !ready }
                        PlayPauseButton {
                            playing: is_playing,
                            pending: pending.is_some(),
                            disabled: !ready,
                        }
                        NextButton { disabled: !ready }
                    }
                    TimeBar {
                        current_time: current_time,
                        duration: duration,
                        disabled: !ready,
                    }
                }
                div { class: "music_volume",
                    div { class: "wrapper",
                        input {
                            class: "slide_volume",
                            id: "volume",
                            r#type: "range",
                            min: "0",
                            max: "100",
                            value: "{volume}",
                            disabled: !ready,
                            oninput: move |e: FormEvent| {
                                if let Ok(value) = e.value().parse::<i32>() {
                                    widget.write().set_volume(value);
                                }
                            },
                        }
                    }
                    MuteButton { muted: muted, disabled: !ready }
                }
            }
        }
    }
}
