use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutConfig {
    taskbar_height: f64,
    window_width: f64,
    window_height: f64,
    spawn_x_min: f64,
    spawn_x_max: f64,
    spawn_y_min: f64,
    spawn_y_max: f64,
    stack_base: u32,
    focus_bonus: u32,
    clock_refresh_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowEntry {
    id: String,
    title: String,
    icon_glyph: String,
    icon_x: f64,
    icon_y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopCatalog {
    schema_version: u32,
    layout: LayoutConfig,
    windows: Vec<WindowEntry>,
}

fn validate_layout(layout: &LayoutConfig) {
    if layout.taskbar_height < 0.0 {
        panic!("layout.taskbar_height must not be negative");
    }
    if layout.window_width <= 0.0 || layout.window_height <= 0.0 {
        panic!("layout window size must be positive");
    }
    if layout.spawn_x_min >= layout.spawn_x_max || layout.spawn_y_min >= layout.spawn_y_max {
        panic!("layout spawn bands must satisfy min < max");
    }
    if layout.focus_bonus == 0 {
        panic!("layout.focus_bonus must be positive");
    }
    if layout.clock_refresh_ms == 0 {
        panic!("layout.clock_refresh_ms must be positive");
    }
}

fn validate_windows(windows: &[WindowEntry]) {
    let mut seen = HashSet::new();
    for entry in windows {
        if entry.id.trim().is_empty() {
            panic!("window entry with empty id");
        }
        if !seen.insert(entry.id.as_str()) {
            panic!("duplicate window id `{}`", entry.id);
        }
        if entry.title.trim().is_empty() || entry.icon_glyph.is_empty() {
            panic!("window `{}` needs a title and an icon glyph", entry.id);
        }
        if entry.icon_x < 0.0 || entry.icon_y < 0.0 {
            panic!("window `{}` has a negative icon position", entry.id);
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: DesktopCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }
    validate_layout(&catalog.layout);
    validate_windows(&catalog.windows);

    let json = serde_json::to_string_pretty(&catalog).expect("serialize desktop catalog");
    let generated = format!(
        "/// Build-time generated desktop catalog JSON.\n\
pub const DESKTOP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
