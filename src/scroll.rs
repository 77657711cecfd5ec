//! The marquee scroll window.
//!
//! A pause → scroll → pause cycle over the grapheme clusters of a title,
//! driven entirely by a caller-maintained elapsed-time counter. The window is
//! a pure function of `(title, elapsed_ms)`: the same inputs always yield the
//! same slice, so irregular or dropped UI ticks cannot desynchronise the
//! animation and there is no internal timer or stored offset.

use unicode_segmentation::UnicodeSegmentation;

use crate::config::ScrollSettings;

/// Split `text` into Unicode extended grapheme clusters.
///
/// Windowing operates on clusters so multi-code-point characters (flags,
/// ZWJ emoji sequences) are never cut in half.
pub fn segment_clusters(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Compute the visible slice of `title` at `elapsed_ms`.
///
/// One full cycle is `start_pause_steps + scroll_range + end_pause_steps`
/// discrete steps of `step_duration_ms` each: hold at the left edge, advance
/// one cluster per step, hold at the right edge, then repeat. `scroll_range`
/// is the cluster count minus the window width.
///
/// Titles that already fit the window are returned unchanged; callers
/// normally exclude them before getting here.
pub fn scroll_window(title: &str, elapsed_ms: u64, scroll: &ScrollSettings) -> String {
    let clusters = segment_clusters(title);

    let visible = scroll.visible_clusters.max(1);
    if clusters.len() <= visible {
        return title.to_string();
    }

    let scroll_range = clusters.len() - visible;
    let cycle_steps = scroll.start_pause_steps + scroll_range + scroll.end_pause_steps;

    let total_steps = elapsed_ms / scroll.step_duration_ms.max(1);
    let step_in_cycle = (total_steps % cycle_steps as u64) as usize;

    let offset = if step_in_cycle < scroll.start_pause_steps {
        0
    } else if step_in_cycle < scroll.start_pause_steps + scroll_range {
        step_in_cycle - scroll.start_pause_steps
    } else {
        scroll_range
    };

    clusters[offset..offset + visible].concat()
}
