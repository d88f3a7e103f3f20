use serde::{Deserialize, Serialize};

use crate::media::media_model::MediaLocator;

// ============================================================================
// Player model — one native video element and how it behaves
// ============================================================================

/// Transport and start-up behaviour of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    pub autoplay: bool,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub muted: bool,
    pub controls: bool,
}

impl PlaybackConfig {
    /// Autoplay, loop, start muted, show controls.
    ///
    /// Browsers only allow autoplay for muted media, so these four travel
    /// together for every player on the review page.
    pub fn review() -> Self {
        Self {
            autoplay: true,
            looping: true,
            muted: true,
            controls: true,
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self::review()
    }
}

/// How a player is sized inside its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Sizing {
    /// Full width up to `max_width_px`, scaling down below it
    MaxWidth { max_width_px: u32 },
    /// Cropped to a square on wide layouts and to `height_px` on narrow ones
    CroppedTile { height_px: u32 },
}

/// A player bound to (at most) one source.
///
/// `source == None` means the slot had nothing to play; the player is still
/// laid out so the grid keeps its shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub source: Option<MediaLocator>,
    pub playback: PlaybackConfig,
    pub sizing: Sizing,
    pub alt_text: String,
}

impl Player {
    pub fn new(source: Option<MediaLocator>, sizing: Sizing, alt_text: &str) -> Self {
        Self {
            source,
            playback: PlaybackConfig::review(),
            sizing,
            alt_text: alt_text.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.source.is_none()
    }
}

/// Stable identity of a player within a page: `primary` or `roi:<key>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn primary() -> Self {
        Self("primary".to_string())
    }

    pub fn roi(key: &str) -> Self {
        Self(format!("roi:{}", key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
