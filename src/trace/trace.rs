use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::review::review_model::ReviewPage;

/// One line of the render trace: what a render produced and what it left out.
#[derive(Debug, Serialize)]
pub struct RenderEvent {
    pub timestamp_ms: u128,

    pub title: String,
    pub primary_source: Option<String>,

    pub cards: usize,
    pub placeholders: Vec<String>,
    pub ignored_keys: Vec<String>,

    pub fingerprint: String,

    pub format: Option<String>,
    pub output: Option<String>,
}

impl RenderEvent {
    pub fn from_page(page: &ReviewPage) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            title: page.layout.title.clone(),
            primary_source: page.primary.source.as_ref().map(|s| s.to_string()),
            cards: page.gallery.len(),
            placeholders: page
                .placeholder_keys()
                .into_iter()
                .map(str::to_string)
                .collect(),
            ignored_keys: page.ignored_keys.clone(),
            fingerprint: page.fingerprint(),
            format: None,
            output: None,
        }
    }

    pub fn with_format(mut self, format: impl ToString) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn with_output(mut self, output: impl ToString) -> Self {
        self.output = Some(output.to_string());
        self
    }
}
