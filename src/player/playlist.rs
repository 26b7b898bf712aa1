use std::fmt;

use url::Url;

use super::PlayerError;

/// Opaque identifier of a playlist on the external music service.
/// The empty identifier means "nothing selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PlaylistId(String);

impl PlaylistId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PlaylistId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Pull the playlist identifier out of a pasted playlist URL (`?list=...`).
pub fn extract_playlist_id(input: &str) -> Result<PlaylistId, PlayerError> {
    let url = Url::parse(input.trim())?;
    let list = url
        .query_pairs()
        .find(|(key, _)| key == "list")
        .map(|(_, value)| value.into_owned())
        .ok_or(PlayerError::MissingListParameter)?;

    if list.is_empty() {
        return Err(PlayerError::EmptyListParameter);
    }
    Ok(PlaylistId(list))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_list_parameter() {
        let id = extract_playlist_id("https://music.example.com/playlist?list=PL123").unwrap();
        assert_eq!(id.as_str(), "PL123");
    }

    #[test]
    fn ignores_other_parameters_and_whitespace() {
        let id = extract_playlist_id(
            "  https://music.youtube.com/watch?v=abc&list=OLAK5uy_k%2Dx&si=zz \n",
        )
        .unwrap();
        assert_eq!(id.as_str(), "OLAK5uy_k-x");
    }

    #[test]
    fn missing_list_fails_and_leaves_current_id_alone() {
        let mut current = PlaylistId::new("PL123");
        match extract_playlist_id("https://music.example.com/playlist") {
            Ok(id) => current = id,
            Err(err) => assert_eq!(err, PlayerError::MissingListParameter),
        }
        assert_eq!(current.as_str(), "PL123");
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(
            extract_playlist_id("https://music.example.com/playlist?list="),
            Err(PlayerError::EmptyListParameter)
        );
    }

    #[test]
    fn malformed_url_is_rejected() {
        assert!(matches!(
            extract_playlist_id("not a url"),
            Err(PlayerError::InvalidUrl(_))
        ));
    }
}
