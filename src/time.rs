//! Clock-style formatting of millisecond durations.

/// Format a millisecond duration as a clock string.
///
/// Non-positive inputs render as `0:00`. Durations of an hour or more use
/// `H:MM:SS` (hours unpadded), shorter ones `M:SS` (minutes unpadded);
/// digits are always ASCII regardless of locale.
pub fn format_time(millis: i64) -> String {
    if millis <= 0 {
        return "0:00".to_string();
    }

    let total_seconds = millis / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Format playback progress as `position / duration`.
pub fn format_music_progress(position_ms: i64, duration_ms: i64) -> String {
    format!(
        "{} / {}",
        format_time(position_ms),
        format_time(duration_ms)
    )
}
