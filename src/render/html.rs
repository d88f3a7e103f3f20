use crate::player::player_model::Player;
use crate::review::review_model::{ReviewPage, RoiCard};

// ============================================================================
// HTML renderer — self-contained review page
// ============================================================================

/// Generate a self-contained HTML review page.
///
/// Layout:
/// - Region A: the original video, full width up to `max_width_px`
/// - Region B: one card per ROI slot in a grid, one column on narrow
///   viewports and `columns` from `breakpoint_px` up
/// - Each card is a single link wrapping player, label and caption
/// - Inline CSS (no external dependencies)
///
/// Every `<video>` carries `autoplay loop muted controls playsinline`.
pub fn generate_html_page(page: &ReviewPage) -> String {
    let layout = &page.layout;

    let primary = video_tag(&page.primary, "primary-video");

    let mut cards = String::new();
    for card in &page.gallery {
        cards.push_str(&card_html(card));
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; color: #222; }}
.header {{ background: #263238; color: white; padding: 20px 30px; }}
.header h1 {{ margin: 0; font-size: 24px; }}
.content {{ max-width: 1100px; margin: 20px auto; padding: 0 20px; }}
.primary {{ display: flex; justify-content: center; margin-bottom: 32px; }}
.primary-video {{ width: 100%; max-width: {max_width}px; height: auto; background: #000; border-radius: 6px; }}
.gallery {{ display: grid; grid-template-columns: 1fr; gap: 16px; }}
.card {{ display: block; background: white; border-radius: 6px; padding: 12px; color: inherit; text-decoration: none; box-shadow: 0 1px 3px rgba(0,0,0,0.12); }}
.card:hover {{ box-shadow: 0 3px 8px rgba(0,0,0,0.2); }}
.card video {{ display: block; width: 100%; height: {tile_height}px; object-fit: cover; background: #000; border-radius: 4px; }}
.card video.missing {{ background: #cfd8dc; }}
.card h3 {{ margin: 10px 0 4px 0; font-size: 16px; }}
.card p {{ margin: 0; color: #666; font-size: 14px; }}
.card .unavailable {{ color: #c62828; font-size: 13px; margin-top: 4px; }}
@media (min-width: {breakpoint}px) {{
.gallery {{ grid-template-columns: repeat({columns}, 1fr); }}
.card video {{ height: auto; aspect-ratio: 1 / 1; }}
}}
</style>
</head>
<body>
<div class="header">
<h1>{title}</h1>
</div>
<div class="content">
<section class="primary">
{primary}
</section>
<section class="gallery">
{cards}</section>
</div>
</body>
</html>
"##,
        title = escape_html(&layout.title),
        max_width = layout.max_width_px,
        tile_height = layout.tile_height_px,
        breakpoint = layout.breakpoint_px,
        columns = layout.columns.max(1),
        primary = primary,
        cards = cards,
    )
}

/// One gallery card. The `<a>` wraps the player, label and caption so the
/// whole card is the hit target.
///
/// This nests an interactive `<video controls>` inside `<a>`, which the HTML
/// content model disallows. Browsers still render it, but a click on a native
/// control may also follow the link. With the default inert target (`#`)
/// that click goes nowhere.
fn card_html(card: &RoiCard) -> String {
    let entry = &card.entry;
    let key = escape_html(&entry.key);

    let unavailable = if entry.is_placeholder() {
        "<p class=\"unavailable\">Source unavailable</p>\n"
    } else {
        ""
    };

    format!(
        r#"<a class="card" id="{key}" data-key="{key}" href="{href}">
{video}
<h3>{label}</h3>
<p>{description}</p>
{unavailable}</a>
"#,
        key = key,
        href = escape_html(&entry.link_target.href()),
        video = video_tag(&card.player, ""),
        label = escape_html(&entry.display_name),
        description = escape_html(&entry.description),
        unavailable = unavailable,
    )
}

/// Native video element for a player. Placeholders get no `src`.
fn video_tag(player: &Player, class: &str) -> String {
    let mut classes: Vec<&str> = Vec::new();
    if !class.is_empty() {
        classes.push(class);
    }
    if player.is_placeholder() {
        classes.push("missing");
    }

    let mut attrs = String::new();
    if !classes.is_empty() {
        attrs.push_str(&format!(" class=\"{}\"", classes.join(" ")));
    }
    if let Some(src) = &player.source {
        attrs.push_str(&format!(" src=\"{}\"", escape_html(src.as_str())));
    }
    attrs.push_str(&format!(" aria-label=\"{}\"", escape_html(&player.alt_text)));

    let playback = &player.playback;
    for (flag, name) in [
        (playback.autoplay, "autoplay"),
        (playback.looping, "loop"),
        (playback.muted, "muted"),
        (playback.controls, "controls"),
    ] {
        if flag {
            attrs.push(' ');
            attrs.push_str(name);
        }
    }
    attrs.push_str(" playsinline preload=\"auto\"");

    format!(
        "<video{}>{}</video>",
        attrs,
        escape_html(&player.alt_text)
    )
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
