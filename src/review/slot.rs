use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ReviewError;

// ============================================================================
// ROI slots — the closed, ordered set of regions a review page shows
// ============================================================================

/// One known region of interest: the key looked up in the input, plus the
/// label and caption shown on its card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiSlot {
    pub key: String,
    pub label: String,
    pub description: String,
}

impl RoiSlot {
    pub fn new(key: &str, label: &str, description: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        }
    }
}

/// Ordered slot list. Gallery order is this order, never the order of the
/// caller's source map.
///
/// Deserializing goes through `RoiSlots::new`, so a document cannot produce
/// an empty list or duplicate keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RoiSlot>", into = "Vec<RoiSlot>")]
pub struct RoiSlots(Vec<RoiSlot>);

impl RoiSlots {
    /// Build a slot set, rejecting empty lists, duplicates, and keys that are
    /// empty or contain whitespace (keys double as element ids and anchors).
    pub fn new(slots: Vec<RoiSlot>) -> Result<Self, ReviewError> {
        if slots.is_empty() {
            return Err(ReviewError::InvalidSlots("no slots configured".into()));
        }

        let mut seen = HashSet::new();
        for slot in &slots {
            if slot.key.trim().is_empty() {
                return Err(ReviewError::InvalidSlots(format!(
                    "slot '{}' has an empty key",
                    slot.label
                )));
            }
            if slot.key.chars().any(char::is_whitespace) {
                return Err(ReviewError::InvalidSlots(format!(
                    "slot key '{}' contains whitespace",
                    slot.key
                )));
            }
            if !seen.insert(slot.key.as_str()) {
                return Err(ReviewError::InvalidSlots(format!(
                    "duplicate slot key '{}'",
                    slot.key
                )));
            }
        }

        Ok(Self(slots))
    }

    /// Left eye, nose, mouth.
    pub fn facial() -> Self {
        Self(vec![
            RoiSlot::new("leftEye", "Left Eye", "Cropped clip of the left eye region"),
            RoiSlot::new("nose", "Nose", "Cropped clip of the nose region"),
            RoiSlot::new("mouth", "Mouth", "Cropped clip of the mouth region"),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoiSlot> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|s| s.key == key)
    }
}

impl TryFrom<Vec<RoiSlot>> for RoiSlots {
    type Error = ReviewError;

    fn try_from(slots: Vec<RoiSlot>) -> Result<Self, Self::Error> {
        Self::new(slots)
    }
}

impl From<RoiSlots> for Vec<RoiSlot> {
    fn from(slots: RoiSlots) -> Self {
        slots.0
    }
}

impl Default for RoiSlots {
    fn default() -> Self {
        Self::facial()
    }
}
