mod common;

use clap::Parser;
use common::utils::scratch_dir;
use roi_review::cli::commands::{build_page, cmd_check, cmd_render, cmd_slots, load_input};
use roi_review::cli::config::{
    AppConfig, Cli, Commands, NavigationConfig, NavigationMode, build_navigator, load_config,
};
use roi_review::error::ReviewError;
use roi_review::nav::navigation::{LinkTarget, Navigator};
use roi_review::review::slot::RoiSlot;
use roi_review::trace::logger::TraceLogger;

const INPUT_YAML: &str = r#"
originalSource: a.mp4
roiSources:
  mouth: m.mp4
  leftEye: le.mp4
  nose: n.mp4
  chin: c.mp4
"#;

fn write_input(dir: &std::path::Path) -> String {
    let path = dir.join("input.yaml");
    std::fs::write(&path, INPUT_YAML).unwrap();
    path.to_str().unwrap().to_string()
}

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_render_minimal() {
    let cli = Cli::parse_from(["roi-review", "render", "--input", "in.yaml"]);
    match cli.command {
        Commands::Render {
            input,
            format,
            output,
            title,
        } => {
            assert_eq!(input, "in.yaml");
            assert!(format.is_none());
            assert!(output.is_none());
            assert!(title.is_none());
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_parse_render_all_args() {
    let cli = Cli::parse_from([
        "roi-review",
        "render",
        "--input",
        "in.json",
        "--format",
        "json",
        "-o",
        "out.json",
        "--title",
        "Clip 12",
    ]);
    match cli.command {
        Commands::Render {
            input,
            format,
            output,
            title,
        } => {
            assert_eq!(input, "in.json");
            assert_eq!(format.as_deref(), Some("json"));
            assert_eq!(output.as_deref(), Some("out.json"));
            assert_eq!(title.as_deref(), Some("Clip 12"));
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_parse_check_and_slots() {
    let cli = Cli::parse_from(["roi-review", "check", "--input", "in.yaml", "--base-dir", "media"]);
    match cli.command {
        Commands::Check { input, base_dir } => {
            assert_eq!(input, "in.yaml");
            assert_eq!(base_dir.as_deref(), Some("media"));
        }
        _ => panic!("Expected Check command"),
    }

    let cli = Cli::parse_from(["roi-review", "slots"]);
    assert!(matches!(cli.command, Commands::Slots));
}

#[test]
fn cli_parse_globals() {
    let cli = Cli::parse_from([
        "roi-review",
        "-vv",
        "--config",
        "custom.yaml",
        "--trace",
        "trace.jsonl",
        "slots",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
    assert_eq!(cli.trace.as_deref(), Some("trace.jsonl"));
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn config_load_missing_file() {
    let config = load_config(Some("nonexistent_file_that_does_not_exist.yaml"));
    assert_eq!(config.page.title, "ROI Review");
    assert_eq!(config.render.format, "html");
    assert_eq!(config.slots.len(), 3);
}

#[test]
fn config_default_values() {
    let config = AppConfig::default();
    assert_eq!(config.page.max_width_px, 720);
    assert_eq!(config.gallery.columns, 3);
    assert_eq!(config.gallery.breakpoint_px, 768);
    assert_eq!(config.gallery.tile_height_px, 240);
    assert_eq!(config.navigation.mode, NavigationMode::Inert);
    assert!(config.navigation.base.is_none());
    assert!(config.render.output.is_none());
    let keys: Vec<&str> = config.slots.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["leftEye", "nose", "mouth"]);
}

#[test]
fn config_partial_yaml() {
    let yaml = r#"
page:
  title: "Lip sync review"
gallery:
  columns: 2
navigation:
  mode: route
  base: /clips
"#;
    let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.page.title, "Lip sync review");
    assert_eq!(config.page.max_width_px, 720);
    assert_eq!(config.gallery.columns, 2);
    assert_eq!(config.gallery.breakpoint_px, 768);
    assert_eq!(config.navigation.mode, NavigationMode::Route);
    assert_eq!(config.slots.len(), 3);
}

#[test]
fn config_malformed_file_falls_back_to_defaults() {
    let dir = scratch_dir("cli_malformed_config");
    let path = dir.join("roi-review.yaml");
    std::fs::write(&path, "page: [not, a, map").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.page.title, "ROI Review");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn config_invalid_slots_rejected() {
    let mut config = AppConfig::default();
    config.slots = vec![
        RoiSlot::new("nose", "Nose", "a"),
        RoiSlot::new("nose", "Nose", "b"),
    ];
    assert!(matches!(config.roi_slots(), Err(ReviewError::InvalidSlots(_))));
    assert!(cmd_slots(&config).is_err());
}

#[test]
fn page_layout_title_override() {
    let config = AppConfig::default();
    assert_eq!(config.page_layout(None).title, "ROI Review");
    assert_eq!(config.page_layout(Some("Take 3")).title, "Take 3");
    assert_eq!(config.page_layout(None).columns, 3);
}

#[test]
fn navigator_from_config() {
    let slot = RoiSlot::new("mouth", "Mouth", "m");
    let route = NavigationConfig {
        mode: NavigationMode::Route,
        base: Some("/review/9".into()),
    };
    assert_eq!(
        build_navigator(&route).activate(&slot),
        LinkTarget::Href("/review/9/mouth".into())
    );
    assert_eq!(
        build_navigator(&NavigationConfig::default()).activate(&slot),
        LinkTarget::Inert
    );
}

// ============================================================================
// Command Tests
// ============================================================================

#[test]
fn load_input_yaml_and_json() {
    let dir = scratch_dir("cli_load_input");
    let yaml_path = write_input(&dir);
    let input = load_input(&yaml_path).unwrap();
    assert_eq!(input.original_source.as_str(), "a.mp4");
    assert_eq!(input.roi_sources.len(), 4);

    let json_path = dir.join("input.json");
    std::fs::write(
        &json_path,
        r#"{"originalSource": "b.mp4", "roiSources": {"nose": "n.mp4"}}"#,
    )
    .unwrap();
    let input = load_input(json_path.to_str().unwrap()).unwrap();
    assert_eq!(input.original_source.as_str(), "b.mp4");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn load_input_errors() {
    assert!(matches!(
        load_input("definitely/not/here.yaml"),
        Err(ReviewError::Io { .. })
    ));

    let dir = scratch_dir("cli_bad_input");
    let path = dir.join("bad.yaml");
    std::fs::write(&path, "roiSources: {}\n").unwrap();
    assert!(matches!(
        load_input(path.to_str().unwrap()),
        Err(ReviewError::Parse { .. })
    ));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn build_page_uses_config_slots_and_navigation() {
    let mut config = AppConfig::default();
    config.navigation.mode = NavigationMode::Anchor;
    config.slots = vec![RoiSlot::new("mouth", "Mouth", "Mouth region")];

    let dir = scratch_dir("cli_build_page");
    let input = load_input(&write_input(&dir)).unwrap();
    let page = build_page(&config, &input, Some("One slot")).unwrap();

    assert_eq!(page.layout.title, "One slot");
    assert_eq!(page.gallery.len(), 1);
    assert_eq!(page.gallery[0].entry.link_target, LinkTarget::Anchor("mouth".into()));
    assert_eq!(
        page.ignored_keys,
        vec!["chin".to_string(), "leftEye".to_string(), "nose".to_string()]
    );
}

#[test]
fn render_writes_html_and_trace() {
    let dir = scratch_dir("cli_render");
    let input = write_input(&dir);
    let out = dir.join("review.html");
    let trace = dir.join("trace.jsonl");
    let _ = std::fs::remove_file(&trace);

    let tracer = TraceLogger::new(trace.to_str().unwrap());
    cmd_render(
        &AppConfig::default(),
        &input,
        None,
        out.to_str(),
        None,
        &tracer,
    )
    .unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("src=\"le.mp4\""));
    assert!(!html.contains("c.mp4"));

    let line = std::fs::read_to_string(&trace).unwrap();
    let event: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(event["cards"], 3);
    assert_eq!(event["format"], "html");
    assert_eq!(event["ignored_keys"][0], "chin");
    assert_eq!(event["fingerprint"].as_str().unwrap().len(), 40);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn render_rejects_unknown_format() {
    let dir = scratch_dir("cli_render_format");
    let input = write_input(&dir);
    let result = cmd_render(
        &AppConfig::default(),
        &input,
        Some("pdf"),
        None,
        None,
        &TraceLogger::disabled(),
    );
    assert!(matches!(result, Err(ReviewError::UnknownFormat(f)) if f == "pdf"));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn check_reports_missing_files() {
    let dir = scratch_dir("cli_check");
    let input = write_input(&dir);
    for name in ["a.mp4", "le.mp4", "n.mp4", "m.mp4"] {
        std::fs::write(dir.join(name), b"").unwrap();
    }
    assert!(cmd_check(&AppConfig::default(), &input, None).unwrap());

    std::fs::remove_file(dir.join("n.mp4")).unwrap();
    assert!(!cmd_check(&AppConfig::default(), &input, None).unwrap());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn slots_listing() {
    let listing = cmd_slots(&AppConfig::default()).unwrap();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("leftEye"));
    assert!(lines[1].starts_with("nose"));
    assert!(lines[2].starts_with("mouth"));
    assert!(lines[0].contains("Left Eye"));
}
