use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::info;

use crate::cli::config::{AppConfig, build_navigator};
use crate::error::ReviewError;
use crate::player::lifecycle::{LocalFileRuntime, MountedPage, PlaybackState};
use crate::render::{OutputFormat, render};
use crate::review::review_model::{ReviewInput, ReviewPage};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::RenderEvent;

// ============================================================================
// render subcommand
// ============================================================================

/// Render the review page for `input_path` and write or print it.
pub fn cmd_render(
    config: &AppConfig,
    input_path: &str,
    format: Option<&str>,
    output: Option<&str>,
    title: Option<&str>,
    tracer: &TraceLogger,
) -> Result<(), ReviewError> {
    // CLI > config > default
    let format_name = format.unwrap_or(&config.render.format);
    let format: OutputFormat = format_name.parse()?;
    let output = output.or(config.render.output.as_deref());

    let input = load_input(input_path)?;
    let page = build_page(config, &input, title)?;
    let content = render(&page, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &content).map_err(|e| ReviewError::io(path, e))?;
            info!(path, cards = page.gallery.len(), "wrote review page");
        }
        None => print!("{}", content),
    }

    let mut event = RenderEvent::from_page(&page).with_format(format_name);
    if let Some(path) = output {
        event = event.with_output(path);
    }
    tracer.log(&event);

    Ok(())
}

// ============================================================================
// check subcommand
// ============================================================================

/// Mount the page against local files and print each player's state.
/// Returns whether every player with a source attached.
pub fn cmd_check(
    config: &AppConfig,
    input_path: &str,
    base_dir: Option<&str>,
) -> Result<bool, ReviewError> {
    let input = load_input(input_path)?;
    let page = build_page(config, &input, None)?;

    let base = match base_dir {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(input_path)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let mounted = MountedPage::mount(&page, Rc::new(LocalFileRuntime::new(base)));
    let states = mounted.states();
    mounted.unmount();

    let mut all_ok = true;
    for (id, state) in &states {
        match state {
            PlaybackState::Attached => println!("  \u{2713} {}", id),
            PlaybackState::Empty => println!("  - {} (no source)", id),
            PlaybackState::Failed(reason) => {
                all_ok = false;
                println!("  \u{2717} {}: {}", id, reason);
            }
        }
    }

    Ok(all_ok)
}

// ============================================================================
// slots subcommand
// ============================================================================

/// One line per configured slot: `key  label  description`.
pub fn cmd_slots(config: &AppConfig) -> Result<String, ReviewError> {
    let slots = config.roi_slots()?;
    let key_width = slots.iter().map(|s| s.key.len()).max().unwrap_or(0);
    let label_width = slots.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for slot in slots.iter() {
        out.push_str(&format!(
            "{:<kw$}  {:<lw$}  {}\n",
            slot.key,
            slot.label,
            slot.description,
            kw = key_width,
            lw = label_width
        ));
    }
    Ok(out)
}

// ============================================================================
// Helpers
// ============================================================================

/// Load a review input document. YAML and JSON are both accepted.
pub fn load_input(path: &str) -> Result<ReviewInput, ReviewError> {
    let content = std::fs::read_to_string(path).map_err(|e| ReviewError::io(path, e))?;
    serde_yaml::from_str(&content).map_err(|e| ReviewError::parse(path, e))
}

/// Build a page from config and input.
pub fn build_page(
    config: &AppConfig,
    input: &ReviewInput,
    title: Option<&str>,
) -> Result<ReviewPage, ReviewError> {
    let slots = config.roi_slots()?;
    let navigator = build_navigator(&config.navigation);
    Ok(ReviewPage::build(
        input,
        &slots,
        navigator.as_ref(),
        config.page_layout(title),
    ))
}
