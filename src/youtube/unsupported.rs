use crate::player::{HandleConfig, HandleEvent, MediaHandle, PlayerError, TrackMetadata};

pub async fn load_iframe_api() -> Result<(), PlayerError> {
    Err(PlayerError::Unsupported)
}

/// Placeholder handle for targets without a browser; never constructed.
#[allow(dead_code)]
pub struct YoutubeHandle {
    _private: (),
}

impl YoutubeHandle {
    pub fn create<F>(
        _host_id: &str,
        _element_id: &str,
        _config: &HandleConfig,
        _on_event: F,
    ) -> Result<Self, PlayerError>
    where
        F: FnMut(HandleEvent) + 'static,
    {
        Err(PlayerError::Unsupported)
    }
}

impl MediaHandle for YoutubeHandle {
    fn play(&self) {}
    fn pause(&self) {}
    fn next_track(&self) {}
    fn previous_track(&self) {}
    fn seek_to(&self, _seconds: f64) {}
    fn set_volume(&self, _volume: u8) {}
    fn set_shuffle(&self, _enabled: bool) {}

    fn current_time(&self) -> f64 {
        0.0
    }

    fn duration(&self) -> f64 {
        0.0
    }

    fn track_metadata(&self) -> TrackMetadata {
        TrackMetadata::default()
    }

    fn destroy(self) {}
}
