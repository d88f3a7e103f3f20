use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::media::media_model::MediaLocator;
use crate::nav::navigation::LinkTarget;
use crate::player::player_model::Player;

// ============================================================================
// Input — what the caller hands over for one review session
// ============================================================================

/// Sources for one review session.
///
/// Field names follow the props contract (`originalSource`, `roiSources`) so
/// the same document works as YAML or JSON input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
    pub original_source: MediaLocator,

    #[serde(default)]
    pub roi_sources: BTreeMap<String, MediaLocator>,
}

impl ReviewInput {
    pub fn new(original_source: impl Into<MediaLocator>) -> Self {
        Self {
            original_source: original_source.into(),
            roi_sources: BTreeMap::new(),
        }
    }

    pub fn with_roi(mut self, key: &str, source: impl Into<MediaLocator>) -> Self {
        self.roi_sources.insert(key.to_string(), source.into());
        self
    }
}

// ============================================================================
// Entries and cards
// ============================================================================

/// One gallery entry derived from a slot and the caller's sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiEntry {
    /// Stable identifier, also the in-page anchor
    pub key: String,
    pub display_name: String,
    pub description: String,
    /// `None` when the input had no usable source for this slot
    pub source: Option<MediaLocator>,
    pub alt_text: String,
    #[serde(default)]
    pub link_target: LinkTarget,
}

impl RoiEntry {
    pub fn is_placeholder(&self) -> bool {
        self.source.is_none()
    }
}

/// A gallery card: the entry plus the player rendered inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiCard {
    pub entry: RoiEntry,
    pub player: Player,
}

// ============================================================================
// Layout settings and the assembled page
// ============================================================================

/// Sizing knobs for the two regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    pub title: String,
    /// Maximum width of the primary preview
    pub max_width_px: u32,
    /// Gallery columns on wide viewports (narrow is always one column)
    pub columns: u32,
    /// Viewport width at which the gallery switches to `columns`
    pub breakpoint_px: u32,
    /// Tile height used on narrow viewports
    pub tile_height_px: u32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            title: "ROI Review".to_string(),
            max_width_px: 720,
            columns: 3,
            breakpoint_px: 768,
            tile_height_px: 240,
        }
    }
}

/// The complete review layout: region A (primary) and region B (gallery).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewPage {
    pub layout: PageLayout,
    pub primary: Player,
    pub gallery: Vec<RoiCard>,

    /// Input keys that matched no slot
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignored_keys: Vec<String>,
}

impl ReviewPage {
    /// Keys of cards rendered in the placeholder state.
    pub fn placeholder_keys(&self) -> Vec<&str> {
        self.gallery
            .iter()
            .filter(|c| c.entry.is_placeholder())
            .map(|c| c.entry.key.as_str())
            .collect()
    }

    /// Every player on the page, primary first.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        std::iter::once(&self.primary).chain(self.gallery.iter().map(|c| &c.player))
    }

    /// SHA-1 of the page's JSON form. Equal pages give equal fingerprints.
    pub fn fingerprint(&self) -> String {
        use sha1::{Digest, Sha1};

        // Plain data only; serialization cannot fail here.
        let json = serde_json::to_string(self).unwrap_or_default();
        let mut hasher = Sha1::new();
        hasher.update(json.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
