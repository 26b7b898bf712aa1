pub const DEFAULT_VOLUME: u8 = 50;

const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";

/// Lifecycle of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WidgetPhase {
    /// No handle yet, or waiting for the handle's ready notification.
    #[default]
    Uninitialized,
    Ready,
    Playing,
    /// Also covers "ended".
    Paused,
    /// The handle never became usable.
    Failed(FailureReason),
    /// Torn down; nothing is processed anymore.
    Closed,
}

impl WidgetPhase {
    /// Whether the handle has signalled ready and still accepts commands.
    pub fn accepts_commands(&self) -> bool {
        matches!(self, Self::Ready | Self::Playing | Self::Paused)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    ReadyTimeout,
    Creation(String),
    PlayerError(i32),
}

impl FailureReason {
    pub fn message(&self) -> String {
        match self {
            Self::ReadyTimeout => "The player took too long to load.".to_string(),
            Self::Creation(reason) => reason.clone(),
            Self::PlayerError(code) => match code {
                2 => "The playlist identifier is not valid.".to_string(),
                5 => "The player could not play this content.".to_string(),
                100 => "The playlist or track was not found.".to_string(),
                101 | 150 => "This playlist cannot be played outside YouTube.".to_string(),
                other => format!("The player reported error {other}."),
            },
        }
    }
}

/// Optimistic play/pause request not yet confirmed by the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingTransition {
    ToPlaying,
    ToPaused,
}

/// Local mirror of the handle's playback state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatus {
    pub is_playing: bool,
    pub is_shuffled: bool,
    pub volume: u8,
    /// Last nonzero volume, restored on unmute.
    pub previous_volume: u8,
    pub current_time: f64,
    pub duration: f64,
    pub title: String,
    pub artist: String,
    pub thumbnail_url: String,
    pub pending: Option<PendingTransition>,
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self::with_volume(DEFAULT_VOLUME)
    }
}

impl PlayerStatus {
    pub fn with_volume(volume: u8) -> Self {
        let volume = volume.min(100);
        Self {
            is_playing: false,
            is_shuffled: false,
            volume,
            previous_volume: volume,
            current_time: 0.0,
            duration: 0.0,
            title: String::new(),
            artist: String::new(),
            thumbnail_url: String::new(),
            pending: None,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.volume == 0
    }
}

/// Cover image for a track, resolved by the image element itself.
pub fn thumbnail_url(track_id: &str) -> String {
    if track_id.is_empty() {
        return String::new();
    }
    format!("{THUMBNAIL_BASE}/{track_id}/0.jpg")
}

/// Render seconds as `M:SS`. Minutes are not wrapped into hours.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3599.0), "59:59");
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(61.9), "1:01");
    }

    #[test]
    fn bad_time_input_renders_zero() {
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn thumbnail_from_track_id() {
        assert_eq!(thumbnail_url("abc123"), "https://img.youtube.com/vi/abc123/0.jpg");
        assert_eq!(thumbnail_url(""), "");
    }

    #[test]
    fn defaults_are_silent_and_empty() {
        let status = PlayerStatus::default();
        assert!(!status.is_playing);
        assert_eq!(status.volume, DEFAULT_VOLUME);
        assert_eq!(status.previous_volume, DEFAULT_VOLUME);
        assert_eq!(status.current_time, 0.0);
        assert!(status.title.is_empty());
        assert!(status.pending.is_none());
    }
}
