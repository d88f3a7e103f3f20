use crate::error::ReviewError;
use crate::review::review_model::ReviewPage;

/// Pretty-printed JSON of the page model, for tooling that renders the
/// layout itself.
pub fn to_json(page: &ReviewPage) -> Result<String, ReviewError> {
    Ok(serde_json::to_string_pretty(page)?)
}
