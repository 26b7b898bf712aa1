use thiserror::Error;

/// Errors raised while turning user input or the external player into a usable handle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlayerError {
    #[error("Invalid YouTube Music playlist URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid YouTube Music playlist URL: missing `list` parameter")]
    MissingListParameter,

    #[error("Invalid YouTube Music playlist URL: empty `list` parameter")]
    EmptyListParameter,

    /// The IFrame API script could not be loaded or never exposed `YT.Player`.
    #[error("YouTube player API unavailable: {0}")]
    ApiUnavailable(String),

    #[error("Failed to create YouTube player: {0}")]
    HandleCreation(String),

    /// The embedded player is only reachable from a browser build.
    #[error("YouTube player is not supported on this platform")]
    Unsupported,
}
