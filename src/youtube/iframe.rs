use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Promise, Reflect, JSON};
use tracing::{debug, info, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlScriptElement};

use crate::player::{
    HandleConfig, HandleEvent, MediaHandle, PlaybackState, PlayerError, TrackMetadata,
};

const IFRAME_API_URL: &str = "https://www.youtube.com/iframe_api";
const API_READY_HOOK: &str = "onYouTubeIframeAPIReady";

thread_local! {
    // Shared by every caller so the script is injected and the global hook set only once.
    static API_READY: RefCell<Option<Promise>> = const { RefCell::new(None) };
}

type EventClosure = Closure<dyn FnMut(JsValue)>;

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

fn player_constructor() -> Option<Function> {
    let win = window()?;
    let yt = Reflect::get(&win, &"YT".into()).ok()?;
    if yt.is_undefined() || yt.is_null() {
        return None;
    }
    Reflect::get(&yt, &"Player".into())
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Resolve once the IFrame API is usable, injecting its script on first use.
pub async fn load_iframe_api() -> Result<(), PlayerError> {
    if player_constructor().is_some() {
        return Ok(());
    }

    let promise = API_READY.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(inject_api_script)
            .clone()
    });

    if let Err(err) = JsFuture::from(promise).await {
        // Forget the rejected load so a retry injects the script again.
        API_READY.with(|slot| slot.borrow_mut().take());
        return Err(PlayerError::ApiUnavailable(describe(&err)));
    }

    player_constructor()
        .map(|_| ())
        .ok_or_else(|| PlayerError::ApiUnavailable("YT.Player is not defined".to_string()))
}

fn inject_api_script() -> Promise {
    Promise::new(&mut |resolve: Function, reject: Function| {
        let Some(win) = window() else {
            let _ = reject.call1(&JsValue::NULL, &"no window".into());
            return;
        };

        let on_ready = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        if let Err(err) = Reflect::set(&win, &API_READY_HOOK.into(), &on_ready) {
            let _ = reject.call1(&JsValue::NULL, &err);
            return;
        }

        let script = win
            .document()
            .and_then(|doc| doc.create_element("script").ok())
            .and_then(|el| el.dyn_into::<HtmlScriptElement>().ok());
        let Some(script) = script else {
            let _ = reject.call1(&JsValue::NULL, &"unable to create script element".into());
            return;
        };
        script.set_src(IFRAME_API_URL);
        script.set_async(true);

        let reject_on_error = reject.clone();
        let on_error = Closure::once_into_js(move || {
            let _ = reject_on_error.call1(&JsValue::NULL, &"failed to load iframe_api".into());
        });
        script.set_onerror(Some(on_error.unchecked_ref()));

        let appended = win
            .document()
            .and_then(|doc| doc.body())
            .map(|body| body.append_child(&script));
        match appended {
            Some(Ok(_)) => debug!("injected YouTube IFrame API script"),
            Some(Err(err)) => {
                let _ = reject.call1(&JsValue::NULL, &err);
            }
            None => {
                let _ = reject.call1(&JsValue::NULL, &"document has no body".into());
            }
        }
    })
}

/// Put a fresh element inside `host_id` for the IFrame player to replace.
fn mount_container(host_id: &str, element_id: &str) -> Result<(), PlayerError> {
    let doc = window()
        .and_then(|w| w.document())
        .ok_or_else(|| PlayerError::HandleCreation("no document".to_string()))?;
    let host = doc
        .get_element_by_id(host_id)
        .ok_or_else(|| PlayerError::HandleCreation(format!("missing #{host_id}")))?;
    host.set_inner_html("");

    let target = doc
        .create_element("div")
        .map_err(|err| PlayerError::HandleCreation(describe(&err)))?;
    target.set_id(element_id);
    host.append_child(&target)
        .map_err(|err| PlayerError::HandleCreation(describe(&err)))?;
    Ok(())
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), PlayerError> {
    Reflect::set(target, &key.into(), value)
        .map(|_| ())
        .map_err(|err| PlayerError::HandleCreation(describe(&err)))
}

fn event_code(event: &JsValue) -> Option<i32> {
    Reflect::get(event, &"data".into())
        .ok()
        .and_then(|data| data.as_f64())
        .map(|code| code as i32)
}

/// A live `YT.Player` instance.
pub struct YoutubeHandle {
    player: JsValue,
    callbacks: Vec<EventClosure>,
}

impl YoutubeHandle {
    /// Build a player inside `host_id`. Notifications are forwarded to
    /// `on_event` for as long as the handle lives.
    pub fn create<F>(
        host_id: &str,
        element_id: &str,
        config: &HandleConfig,
        on_event: F,
    ) -> Result<Self, PlayerError>
    where
        F: FnMut(HandleEvent) + 'static,
    {
        let constructor = player_constructor()
            .ok_or_else(|| PlayerError::ApiUnavailable("YT.Player is not defined".to_string()))?;
        mount_container(host_id, element_id)?;

        let on_event = Rc::new(RefCell::new(on_event));

        let ready_cb: EventClosure = {
            let on_event = on_event.clone();
            Closure::wrap(Box::new(move |_event: JsValue| {
                (on_event.borrow_mut())(HandleEvent::Ready);
            }) as Box<dyn FnMut(JsValue)>)
        };
        let state_cb: EventClosure = {
            let on_event = on_event.clone();
            Closure::wrap(Box::new(move |event: JsValue| {
                if let Some(state) = event_code(&event).and_then(PlaybackState::from_code) {
                    (on_event.borrow_mut())(HandleEvent::StateChange(state));
                }
            }) as Box<dyn FnMut(JsValue)>)
        };
        let error_cb: EventClosure = {
            let on_event = on_event.clone();
            Closure::wrap(Box::new(move |event: JsValue| {
                if let Some(code) = event_code(&event) {
                    (on_event.borrow_mut())(HandleEvent::Error(code));
                }
            }) as Box<dyn FnMut(JsValue)>)
        };

        let events = Object::new();
        set(&events, "onReady", ready_cb.as_ref())?;
        set(&events, "onStateChange", state_cb.as_ref())?;
        set(&events, "onError", error_cb.as_ref())?;

        let vars = serde_json::to_string(&config.player_vars())
            .map_err(|err| PlayerError::HandleCreation(err.to_string()))?;
        let vars = JSON::parse(&vars).map_err(|err| PlayerError::HandleCreation(describe(&err)))?;

        let options = Object::new();
        // Audio only: the video frame is collapsed.
        set(&options, "height", &"0".into())?;
        set(&options, "width", &"0".into())?;
        set(&options, "playerVars", &vars)?;
        set(&options, "events", &events)?;

        let player = Reflect::construct(
            &constructor,
            &Array::of2(&JsValue::from_str(element_id), &options),
        )
        .map_err(|err| PlayerError::HandleCreation(describe(&err)))?;

        info!(playlist = %config.playlist, element_id, "YouTube player created");
        Ok(Self {
            player,
            callbacks: vec![ready_cb, state_cb, error_cb],
        })
    }

    fn call(&self, method: &str, args: &[JsValue]) -> Option<JsValue> {
        let function = Reflect::get(&self.player, &method.into())
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        let args: Array = args.iter().collect();
        match function.apply(&self.player, &args) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(method, error = %describe(&err), "YouTube player call failed");
                None
            }
        }
    }

    fn call_f64(&self, method: &str) -> f64 {
        self.call(method, &[])
            .and_then(|value| value.as_f64())
            .filter(|value| value.is_finite())
            .unwrap_or(0.0)
    }
}

impl MediaHandle for YoutubeHandle {
    fn play(&self) {
        self.call("playVideo", &[]);
    }

    fn pause(&self) {
        self.call("pauseVideo", &[]);
    }

    fn next_track(&self) {
        self.call("nextVideo", &[]);
    }

    fn previous_track(&self) {
        self.call("previousVideo", &[]);
    }

    fn seek_to(&self, seconds: f64) {
        self.call("seekTo", &[seconds.into(), true.into()]);
    }

    fn set_volume(&self, volume: u8) {
        self.call("setVolume", &[f64::from(volume).into()]);
    }

    fn set_shuffle(&self, enabled: bool) {
        self.call("setShuffle", &[enabled.into()]);
    }

    fn current_time(&self) -> f64 {
        self.call_f64("getCurrentTime")
    }

    fn duration(&self) -> f64 {
        self.call_f64("getDuration")
    }

    fn track_metadata(&self) -> TrackMetadata {
        let Some(data) = self.call("getVideoData", &[]) else {
            return TrackMetadata::default();
        };
        let field = |key: &str| {
            Reflect::get(&data, &key.into())
                .ok()
                .and_then(|value| value.as_string())
                .unwrap_or_default()
        };
        TrackMetadata {
            title: field("title"),
            author: field("author"),
            track_id: field("video_id"),
        }
    }

    fn destroy(self) {
        self.call("destroy", &[]);
        // Notifications already queued by the player may still fire; they
        // carry a stale generation and are ignored on arrival.
        for callback in self.callbacks {
            callback.forget();
        }
        debug!("YouTube player destroyed");
    }
}
