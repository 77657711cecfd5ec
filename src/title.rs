//! The combined artist/album line and the secondary provider/progress line.

use crate::time::format_music_progress;

/// Hard cap on the combined artist/album line, counted in `char`s.
const MAX_TITLE_LEN: usize = 70;

const TITLE_SEPARATOR: &str = " - ";
const SUBTITLE_SEPARATOR: &str = " • ";

/// Build the "Artist - Album" line.
///
/// A part is included only when its flag is set, it is non-blank, and it is
/// not the caller's "metadata missing" sentinel. Joins longer than 70
/// characters are cut there and suffixed with `...`; nothing included yields
/// an empty string.
///
/// Truncation counts `char`s, not grapheme clusters, so a multi-code-point
/// cluster straddling the cap can be split. The marquee in [`crate::scroll`]
/// is cluster-safe; this line keeps the char-count rule.
pub fn build_artist_album_title(
    show_artist: bool,
    show_album: bool,
    artist: &str,
    album: &str,
    empty_artist: &str,
    empty_album: &str,
) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if show_artist && !artist.trim().is_empty() && artist != empty_artist {
        parts.push(artist);
    }
    if show_album && !album.trim().is_empty() && album != empty_album {
        parts.push(album);
    }

    let result = parts.join(TITLE_SEPARATOR);
    if result.chars().count() > MAX_TITLE_LEN {
        let truncated: String = result.chars().take(MAX_TITLE_LEN).collect();
        format!("{truncated}...")
    } else {
        result
    }
}

/// Build the secondary "Provider • 1:05 / 2:05" line.
///
/// Parts are ordered provider first, then progress, each gated by its flag.
/// Returns `None` when the joined result is blank so the caller can drop the
/// row entirely instead of rendering a stray separator.
pub fn combine_provider_and_timestamp(
    provider: &str,
    show_provider: bool,
    show_timestamp: bool,
    position_ms: i64,
    duration_ms: i64,
) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if show_provider {
        parts.push(provider.to_string());
    }
    if show_timestamp {
        parts.push(format_music_progress(position_ms, duration_ms));
    }

    let joined = parts.join(SUBTITLE_SEPARATOR);
    if joined.trim().is_empty() {
        None
    } else {
        Some(joined)
    }
}
