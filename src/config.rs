//! Site-wide settings, provided to components through context.

use serde::{Deserialize, Serialize};

use crate::db::PLAYLIST_KEY;
use crate::player::DEFAULT_VOLUME;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Element the embedded player is mounted into.
    pub player_host_id: String,
    pub poll_interval_ms: u32,
    /// How long to wait for the player's ready notification before giving up.
    pub ready_timeout_ms: u32,
    pub default_volume: u8,
    pub splash_ms: u32,
    pub preference_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            player_host_id: "friendly-player-host".to_string(),
            poll_interval_ms: 1000,
            ready_timeout_ms: 15_000,
            default_volume: DEFAULT_VOLUME,
            splash_ms: 2000,
            preference_key: PLAYLIST_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: SiteConfig = serde_json::from_str(r#"{ "ready_timeout_ms": 5000 }"#).unwrap();
        assert_eq!(config.ready_timeout_ms, 5000);
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.preference_key, "playlistId");
    }
}
