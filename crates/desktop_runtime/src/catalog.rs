//! Embedded desktop catalog generated from `desktop.toml` by the build script.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::{config::DesktopConfig, registry::WindowDescriptor};

include!(concat!(env!("OUT_DIR"), "/desktop_catalog_generated.rs"));

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DesktopCatalog {
    #[allow(dead_code)]
    pub schema_version: u32,
    pub layout: DesktopConfig,
    pub windows: Vec<WindowDescriptor>,
}

pub(crate) fn builtin_catalog() -> &'static DesktopCatalog {
    static CATALOG: OnceLock<DesktopCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(DESKTOP_CATALOG_JSON)
            .expect("generated desktop catalog should parse")
    })
}
