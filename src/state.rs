//! The playback snapshot supplied by the UI layer.

/// One snapshot of what is currently playing.
///
/// The UI layer fills this in fresh on every tick; no formatter keeps state
/// between calls, so a snapshot plus an elapsed-time counter fully determines
/// every piece of rendered text.
#[derive(Clone, Debug, Default)]
pub struct MusicState {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Name of the app or service the track comes from.
    pub provider: String,
    pub position_ms: i64,
    pub duration_ms: i64,
    pub playing: bool,
}

impl MusicState {
    /// Placeholder some players report when track metadata has no artist.
    pub const EMPTY_ARTIST: &'static str = "Unknown Artist";
    /// Placeholder some players report when track metadata has no album.
    pub const EMPTY_ALBUM: &'static str = "Unknown Album";

    /// Whether `artist` carries real metadata (non-blank, not the placeholder).
    pub fn has_artist(&self) -> bool {
        !self.artist.trim().is_empty() && self.artist != Self::EMPTY_ARTIST
    }

    /// Whether `album` carries real metadata (non-blank, not the placeholder).
    pub fn has_album(&self) -> bool {
        !self.album.trim().is_empty() && self.album != Self::EMPTY_ALBUM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_artist_rejects_blank_and_placeholder() {
        let mut state = MusicState::default();
        assert!(!state.has_artist());

        state.artist = "   ".to_string();
        assert!(!state.has_artist());

        state.artist = MusicState::EMPTY_ARTIST.to_string();
        assert!(!state.has_artist());

        state.artist = "Black Sabbath".to_string();
        assert!(state.has_artist());
    }

    #[test]
    fn has_album_rejects_blank_and_placeholder() {
        let mut state = MusicState::default();
        assert!(!state.has_album());

        state.album = MusicState::EMPTY_ALBUM.to_string();
        assert!(!state.has_album());

        state.album = "Paranoid".to_string();
        assert!(state.has_album());
    }
}
