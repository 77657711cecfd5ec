//! Pill content selection.
//!
//! Picks what the pill shows for one UI tick: a timer while playing, or the
//! (possibly scrolling) track title otherwise.

use unicode_segmentation::UnicodeSegmentation;

use crate::config::{PillContentSetting, ScrollSettings, Settings};
use crate::scroll::scroll_window;
use crate::state::MusicState;
use crate::time::format_time;
use crate::title;

/// What the pill shows while a track is loaded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PillContent {
    Elapsed,
    Remaining,
    Title,
}

impl From<PillContentSetting> for PillContent {
    fn from(value: PillContentSetting) -> Self {
        match value {
            PillContentSetting::Elapsed => PillContent::Elapsed,
            PillContentSetting::Remaining => PillContent::Remaining,
            PillContentSetting::Title => PillContent::Title,
        }
    }
}

/// Select the pill's text for one tick.
///
/// The elapsed/remaining timers only render while playing with a known
/// duration. In every other case the trimmed title is shown: cut to the
/// window width when scrolling is off or it already fits, otherwise windowed
/// through the marquee at `elapsed_ms`.
pub fn provide_pill_text(
    title: &str,
    position_ms: i64,
    duration_ms: i64,
    is_playing: bool,
    content: PillContent,
    scroll_enabled: bool,
    elapsed_ms: u64,
    scroll: &ScrollSettings,
) -> String {
    let show_time = is_playing && duration_ms > 0;

    match content {
        PillContent::Elapsed if show_time => return format_time(position_ms),
        PillContent::Remaining if show_time => return format_time(duration_ms - position_ms),
        _ => {}
    }

    // Title mode, or the timers have nothing to show (paused, no duration).
    let trimmed = title.trim();
    let visible = scroll.visible_clusters.max(1);
    if !scroll_enabled || trimmed.graphemes(true).count() <= visible {
        return trimmed.graphemes(true).take(visible).collect();
    }

    scroll_window(trimmed, elapsed_ms, scroll)
}

/// Pill text for a [`MusicState`] snapshot under the configured content mode.
pub fn pill_text(state: &MusicState, settings: &Settings, elapsed_ms: u64) -> String {
    provide_pill_text(
        &state.title,
        state.position_ms,
        state.duration_ms,
        state.playing,
        settings.pill.content.into(),
        settings.pill.scroll_enabled,
        elapsed_ms,
        &settings.scroll,
    )
}

/// The "Artist - Album" line for a snapshot, per the configured flags.
pub fn artist_album_title(state: &MusicState, settings: &Settings) -> String {
    title::build_artist_album_title(
        settings.pill.show_artist,
        settings.pill.show_album,
        &state.artist,
        &state.album,
        MusicState::EMPTY_ARTIST,
        MusicState::EMPTY_ALBUM,
    )
}

/// The secondary provider/progress line, when anything is enabled for it.
pub fn subtitle_text(state: &MusicState, settings: &Settings) -> Option<String> {
    title::combine_provider_and_timestamp(
        &state.provider,
        settings.pill.show_provider,
        settings.pill.show_timestamp,
        state.position_ms,
        state.duration_ms,
    )
}
