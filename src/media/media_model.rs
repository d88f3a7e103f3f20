use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to a playable video resource (path or URI).
///
/// No validation happens here. A locator that points nowhere is a playback
/// problem for whichever player is bound to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaLocator(String);

impl MediaLocator {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether there is anything to hand to a player at all.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for MediaLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaLocator {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MediaLocator {
    fn from(s: String) -> Self {
        Self(s)
    }
}
