use tracing::{debug, warn};

use crate::nav::navigation::Navigator;
use crate::player::player_model::{Player, Sizing};
use crate::review::review_model::{PageLayout, ReviewInput, ReviewPage, RoiCard, RoiEntry};
use crate::review::slot::{RoiSlot, RoiSlots};

// ============================================================================
// Entry derivation
// ============================================================================

/// Derive one entry per configured slot, in slot order.
///
/// Sources come only from `input.roi_sources`. A slot without a (non-blank)
/// source still gets an entry, with `source: None`, so the gallery keeps the
/// same number of cards. Keys the slots don't know are skipped.
pub fn build_entries(
    slots: &RoiSlots,
    input: &ReviewInput,
    navigator: &dyn Navigator,
) -> Vec<RoiEntry> {
    slots
        .iter()
        .map(|slot| {
            let source = input
                .roi_sources
                .get(&slot.key)
                .filter(|loc| !loc.is_blank())
                .cloned();

            if source.is_none() {
                warn!(key = %slot.key, "no source for ROI slot, rendering placeholder");
            }

            RoiEntry {
                key: slot.key.clone(),
                display_name: slot.label.clone(),
                description: slot.description.clone(),
                alt_text: alt_text(slot, source.is_some()),
                source,
                link_target: navigator.activate(slot),
            }
        })
        .collect()
}

/// Input keys that no slot claims, in key order.
pub fn ignored_keys(slots: &RoiSlots, input: &ReviewInput) -> Vec<String> {
    input
        .roi_sources
        .keys()
        .filter(|k| !slots.contains_key(k))
        .cloned()
        .collect()
}

fn alt_text(slot: &RoiSlot, available: bool) -> String {
    if available {
        format!("{} region of interest clip", slot.label)
    } else {
        format!("{} region of interest clip (unavailable)", slot.label)
    }
}

// ============================================================================
// Page assembly
// ============================================================================

impl ReviewPage {
    /// Assemble the review page for one session. Never fails.
    pub fn build(
        input: &ReviewInput,
        slots: &RoiSlots,
        navigator: &dyn Navigator,
        layout: PageLayout,
    ) -> Self {
        let primary_source = Some(input.original_source.clone()).filter(|l| !l.is_blank());
        let primary = Player::new(
            primary_source,
            Sizing::MaxWidth {
                max_width_px: layout.max_width_px,
            },
            "Original video",
        );

        let tile = Sizing::CroppedTile {
            height_px: layout.tile_height_px,
        };
        let gallery = build_entries(slots, input, navigator)
            .into_iter()
            .map(|entry| {
                let player = Player::new(entry.source.clone(), tile, &entry.alt_text);
                RoiCard { entry, player }
            })
            .collect();

        let ignored = ignored_keys(slots, input);
        for key in &ignored {
            debug!(key = %key, "ignoring ROI source with no matching slot");
        }

        Self {
            layout,
            primary,
            gallery,
            ignored_keys: ignored,
        }
    }
}
