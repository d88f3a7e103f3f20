use crate::review::review_model::ReviewPage;

// ============================================================================
// Console reporter — plain-text summary of a review page
// ============================================================================

/// Format a review page as plain text.
///
/// ```text
/// === ROI Review ===
///
/// Original: a.mp4
///
///   ✓ Left Eye  le.mp4
///   ✗ Nose      (no source)
///   ✓ Mouth     m.mp4
///
/// 2 of 3 ROI clips available
/// ```
pub fn format_console_report(page: &ReviewPage) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n\n", page.layout.title));

    let original = page
        .primary
        .source
        .as_ref()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "(no source)".to_string());
    out.push_str(&format!("Original: {}\n\n", original));

    let width = page
        .gallery
        .iter()
        .map(|c| c.entry.display_name.chars().count())
        .max()
        .unwrap_or(0);

    for card in &page.gallery {
        let (marker, source) = match &card.entry.source {
            Some(src) => ("\u{2713}", src.to_string()),
            None => ("\u{2717}", "(no source)".to_string()),
        };
        out.push_str(&format!(
            "  {} {:<width$}  {}\n",
            marker,
            card.entry.display_name,
            source,
            width = width
        ));
    }

    let available = page.gallery.len() - page.placeholder_keys().len();
    out.push_str(&format!(
        "\n{} of {} ROI clips available\n",
        available,
        page.gallery.len()
    ));

    if !page.ignored_keys.is_empty() {
        out.push_str(&format!("Ignored keys: {}\n", page.ignored_keys.join(", ")));
    }

    out
}
