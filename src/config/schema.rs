use serde::Deserialize;

/// Top-level settings for the pill formatters.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/nowpill/config.toml` or `~/.config/nowpill/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `NOWPILL__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pill: PillSettings,
    pub scroll: ScrollSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pill: PillSettings::default(),
            scroll: ScrollSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PillSettings {
    /// What the pill shows while a track is loaded.
    pub content: PillContentSetting,

    /// Whether overflowing titles scroll instead of being cut at the window.
    pub scroll_enabled: bool,

    /// Whether the artist appears in the combined artist/album line.
    pub show_artist: bool,
    /// Whether the album appears in the combined artist/album line.
    pub show_album: bool,

    /// Whether the provider (source app) appears in the secondary line.
    pub show_provider: bool,
    /// Whether elapsed/total progress appears in the secondary line.
    pub show_timestamp: bool,
}

impl Default for PillSettings {
    fn default() -> Self {
        Self {
            content: PillContentSetting::Title,
            scroll_enabled: true,
            show_artist: true,
            show_album: true,
            show_provider: true,
            show_timestamp: true,
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PillContentSetting {
    #[serde(alias = "elapsed_time", alias = "position")]
    Elapsed,
    #[serde(alias = "remaining_time", alias = "time-left")]
    Remaining,
    #[serde(alias = "track-title")]
    Title,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    /// Milliseconds per animation step; the marquee advances once per step.
    pub step_duration_ms: u64,
    /// Steps held at the left edge before scrolling starts.
    pub start_pause_steps: usize,
    /// Steps held at the right edge before the cycle repeats.
    pub end_pause_steps: usize,
    /// Window width, in grapheme clusters.
    pub visible_clusters: usize,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            step_duration_ms: 200,
            start_pause_steps: 5,
            end_pause_steps: 5,
            visible_clusters: 7,
        }
    }
}
