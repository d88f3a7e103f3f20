use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ReviewError;
use crate::nav::navigation::{AnchorNavigator, InertNavigator, Navigator, RouteNavigator};
use crate::review::review_model::PageLayout;
use crate::review::slot::{RoiSlot, RoiSlots};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "roi-review",
    version,
    about = "Review an original video next to its extracted ROI clips"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: roi-review.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append one JSON line per render to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the review page for an input document
    Render {
        /// YAML or JSON file with originalSource and roiSources
        #[arg(long)]
        input: String,

        /// Output format: html, console, json (default from config, else html)
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Page title
        #[arg(long)]
        title: Option<String>,
    },

    /// Mount every player against local files and report which would fail
    Check {
        /// YAML or JSON file with originalSource and roiSources
        #[arg(long)]
        input: String,

        /// Directory relative sources are resolved against (default: the input's directory)
        #[arg(long)]
        base_dir: Option<String>,
    },

    /// List the configured ROI slots
    Slots,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `roi-review.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default = "default_slots")]
    pub slots: Vec<RoiSlot>,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page: PageConfig::default(),
            gallery: GalleryConfig::default(),
            slots: default_slots(),
            navigation: NavigationConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_max_width")]
    pub max_width_px: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            max_width_px: default_max_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_columns")]
    pub columns: u32,

    #[serde(default = "default_breakpoint")]
    pub breakpoint_px: u32,

    #[serde(default = "default_tile_height")]
    pub tile_height_px: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            breakpoint_px: default_breakpoint(),
            tile_height_px: default_tile_height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    #[default]
    Inert,
    Anchor,
    Route,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NavigationConfig {
    #[serde(default)]
    pub mode: NavigationMode,

    /// Route prefix for `mode: route`
    pub base: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_format")]
    pub format: String,

    pub output: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            output: None,
        }
    }
}

// Serde default helpers
fn default_title() -> String { "ROI Review".to_string() }
fn default_max_width() -> u32 { 720 }
fn default_columns() -> u32 { 3 }
fn default_breakpoint() -> u32 { 768 }
fn default_tile_height() -> u32 { 240 }
fn default_format() -> String { "html".to_string() }
fn default_slots() -> Vec<RoiSlot> { RoiSlots::facial().iter().cloned().collect() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if the file is missing;
/// a malformed file is reported and also falls back to defaults.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("roi-review.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            warn!(path = config_path, error = %e, "malformed config file, using defaults");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

impl AppConfig {
    /// Validated slot set.
    pub fn roi_slots(&self) -> Result<RoiSlots, ReviewError> {
        RoiSlots::new(self.slots.clone())
    }

    /// Page layout, with an optional title override from the CLI.
    pub fn page_layout(&self, title: Option<&str>) -> PageLayout {
        PageLayout {
            title: title.unwrap_or(&self.page.title).to_string(),
            max_width_px: self.page.max_width_px,
            columns: self.gallery.columns,
            breakpoint_px: self.gallery.breakpoint_px,
            tile_height_px: self.gallery.tile_height_px,
        }
    }
}

/// Build the navigator selected by `navigation.mode`.
pub fn build_navigator(config: &NavigationConfig) -> Box<dyn Navigator> {
    match config.mode {
        NavigationMode::Inert => Box::new(InertNavigator),
        NavigationMode::Anchor => Box::new(AnchorNavigator),
        NavigationMode::Route => {
            Box::new(RouteNavigator::new(config.base.as_deref().unwrap_or("")))
        }
    }
}
