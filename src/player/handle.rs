use serde::Serialize;

use super::PlaylistId;

/// Imperative surface of an embedded media player.
///
/// Calls are fire-and-forget: the player confirms (or ignores) them through
/// [`HandleEvent`]s delivered to the callback it was created with.
pub trait MediaHandle {
    fn play(&self);
    fn pause(&self);
    fn next_track(&self);
    fn previous_track(&self);
    fn seek_to(&self, seconds: f64);
    fn set_volume(&self, volume: u8);
    fn set_shuffle(&self, enabled: bool);
    fn current_time(&self) -> f64;
    fn duration(&self) -> f64;
    fn track_metadata(&self) -> TrackMetadata;

    /// Release the underlying player. Consumes the handle so it can only happen once.
    fn destroy(self)
    where
        Self: Sized;
}

/// Metadata of the track currently loaded in the player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackMetadata {
    pub title: String,
    pub author: String,
    pub track_id: String,
}

/// Playback states reported by the IFrame player (`YT.PlayerState`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl PlaybackState {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Unstarted),
            0 => Some(Self::Ended),
            1 => Some(Self::Playing),
            2 => Some(Self::Paused),
            3 => Some(Self::Buffering),
            5 => Some(Self::Cued),
            _ => None,
        }
    }
}

/// Notifications pushed by a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleEvent {
    Ready,
    StateChange(PlaybackState),
    /// Player error code (invalid parameter, not embeddable, removed video...).
    Error(i32),
}

/// How a new handle is configured for a playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleConfig {
    pub playlist: PlaylistId,
    pub autoplay: bool,
    pub controls_visible: bool,
    pub modest_branding: bool,
    pub related_content: bool,
}

impl HandleConfig {
    /// Hidden, silent-until-asked configuration used by the site widget.
    pub fn for_playlist(playlist: PlaylistId) -> Self {
        Self {
            playlist,
            autoplay: false,
            controls_visible: false,
            modest_branding: true,
            related_content: false,
        }
    }

    pub fn player_vars(&self) -> PlayerVars {
        PlayerVars {
            list_type: "playlist",
            list: self.playlist.as_str().to_string(),
            autoplay: u8::from(self.autoplay),
            controls: u8::from(self.controls_visible),
            modestbranding: u8::from(self.modest_branding),
            rel: u8::from(self.related_content),
        }
    }
}

/// `playerVars` object handed to `YT.Player`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlayerVars {
    #[serde(rename = "listType")]
    pub list_type: &'static str,
    pub list: String,
    pub autoplay: u8,
    pub controls: u8,
    pub modestbranding: u8,
    pub rel: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_codes_follow_iframe_api() {
        assert_eq!(PlaybackState::from_code(1), Some(PlaybackState::Playing));
        assert_eq!(PlaybackState::from_code(2), Some(PlaybackState::Paused));
        assert_eq!(PlaybackState::from_code(0), Some(PlaybackState::Ended));
        assert_eq!(PlaybackState::from_code(-1), Some(PlaybackState::Unstarted));
        assert_eq!(PlaybackState::from_code(4), None);
    }

    #[test]
    fn widget_config_hides_chrome_and_disables_autoplay() {
        let config = HandleConfig::for_playlist(PlaylistId::new("PL123"));
        let vars = serde_json::to_value(config.player_vars()).unwrap();
        assert_eq!(
            vars,
            serde_json::json!({
                "listType": "playlist",
                "list": "PL123",
                "autoplay": 0,
                "controls": 0,
                "modestbranding": 1,
                "rel": 0,
            })
        );
    }
}
