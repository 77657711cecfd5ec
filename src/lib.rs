//! Text formatting for a compact "now playing" pill widget.
//!
//! The pill is a small fixed-width UI element showing track info: an elapsed
//! or remaining timer, or the track title windowed through a marquee when it
//! does not fit. Everything here is a pure function over one snapshot of
//! playback state; the scroll position is derived from a caller-maintained
//! elapsed-time counter, so two calls with the same inputs always produce the
//! same text. Rendering, layout and playback itself stay with the caller.
//!
//! ```
//! use nowpill::{MusicState, Settings};
//!
//! let settings = Settings::default();
//! let state = MusicState {
//!     title: "Paranoid".to_string(),
//!     artist: "Black Sabbath".to_string(),
//!     playing: true,
//!     position_ms: 65_000,
//!     duration_ms: 125_000,
//!     ..MusicState::default()
//! };
//!
//! // Default content mode is the title; 8 clusters overflow the 7-wide pill,
//! // so the marquee window applies (still at its left edge at 0 ms).
//! assert_eq!(nowpill::pill_text(&state, &settings, 0), "Paranoi");
//! ```

pub mod config;
pub mod pill;
pub mod scroll;
pub mod state;
pub mod time;
pub mod title;

pub use config::Settings;
pub use pill::{PillContent, artist_album_title, pill_text, provide_pill_text, subtitle_text};
pub use scroll::scroll_window;
pub use state::MusicState;
pub use time::{format_music_progress, format_time};
