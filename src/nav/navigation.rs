use serde::{Deserialize, Serialize};

use crate::review::slot::RoiSlot;

/// Where activating a gallery card leads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum LinkTarget {
    /// Placeholder that goes nowhere
    #[default]
    Inert,
    /// In-page anchor (the card's own key)
    Anchor(String),
    /// Route handed to the host router
    Href(String),
}

impl LinkTarget {
    /// Value for an `href` attribute.
    pub fn href(&self) -> String {
        match self {
            LinkTarget::Inert => "#".to_string(),
            LinkTarget::Anchor(key) => format!("#{}", key),
            LinkTarget::Href(url) => url.clone(),
        }
    }

    pub fn is_inert(&self) -> bool {
        matches!(self, LinkTarget::Inert)
    }
}

/// Capability that resolves a card activation into a link target.
///
/// The review page only asks "what happens when this card is activated";
/// routing itself belongs to whoever implements this.
pub trait Navigator {
    fn activate(&self, slot: &RoiSlot) -> LinkTarget;
}

/// Every card is an inert placeholder link.
#[derive(Debug, Clone, Copy, Default)]
pub struct InertNavigator;

impl Navigator for InertNavigator {
    fn activate(&self, _slot: &RoiSlot) -> LinkTarget {
        LinkTarget::Inert
    }
}

/// Cards link to their own anchor on the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorNavigator;

impl Navigator for AnchorNavigator {
    fn activate(&self, slot: &RoiSlot) -> LinkTarget {
        LinkTarget::Anchor(slot.key.clone())
    }
}

/// Cards link to `<base>/<key>`.
#[derive(Debug, Clone)]
pub struct RouteNavigator {
    pub base: String,
}

impl RouteNavigator {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }
}

impl Navigator for RouteNavigator {
    fn activate(&self, slot: &RoiSlot) -> LinkTarget {
        LinkTarget::Href(format!("{}/{}", self.base, slot.key))
    }
}
