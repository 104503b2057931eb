//! Content registry: static window metadata and the content panel each window renders.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    catalog::builtin_catalog,
    model::{Point, WindowKey},
};

/// Title used for ids with no registered descriptor.
pub const FALLBACK_TITLE: &str = "Window";
/// Icon glyph used for ids with no registered descriptor.
pub const FALLBACK_ICON_GLYPH: &str = "📁";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub id: WindowKey,
    pub title: String,
    pub icon_glyph: String,
    /// Design-time position of the desktop icon.
    pub icon_x: f64,
    pub icon_y: f64,
}

impl WindowDescriptor {
    pub fn icon_position(&self) -> Point {
        Point::new(self.icon_x, self.icon_y)
    }

    /// Content panel rendered inside this window.
    pub fn content(&self) -> ContentPanel {
        ContentPanel::for_id(&self.id).unwrap_or_else(|| ContentPanel::Placeholder {
            id: self.id.clone(),
            title: self.title.clone(),
        })
    }
}

/// Renderable content key. The view layer maps each variant to a static panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPanel {
    About,
    Experience,
    Contact,
    Resume,
    Credits,
    Projects,
    /// Generic panel for ids without dedicated content.
    Placeholder { id: WindowKey, title: String },
}

impl ContentPanel {
    pub fn for_id(id: &WindowKey) -> Option<Self> {
        match id.as_str() {
            "about" => Some(Self::About),
            "experience" => Some(Self::Experience),
            "contact" => Some(Self::Contact),
            "resume" => Some(Self::Resume),
            "credits" => Some(Self::Credits),
            "projects" => Some(Self::Projects),
            _ => None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no window descriptor registered for `{0}`")]
    UnknownWindow(WindowKey),
}

/// Display metadata for one window id, after fallback resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWindow {
    pub id: WindowKey,
    pub title: String,
    pub icon_glyph: String,
    pub content: ContentPanel,
    /// `true` when the id had no descriptor and defaults were substituted.
    pub is_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentRegistry {
    descriptors: Vec<WindowDescriptor>,
}

impl ContentRegistry {
    pub fn new(descriptors: Vec<WindowDescriptor>) -> Self {
        Self { descriptors }
    }

    /// Registry backed by the embedded `desktop.toml` catalog.
    pub fn builtin() -> &'static ContentRegistry {
        static REGISTRY: OnceLock<ContentRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| ContentRegistry::new(builtin_catalog().windows.clone()))
    }

    pub fn descriptors(&self) -> &[WindowDescriptor] {
        &self.descriptors
    }

    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownWindow`] when `id` has no descriptor.
    pub fn lookup(&self, id: &WindowKey) -> Result<&WindowDescriptor, RegistryError> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.id == *id)
            .ok_or_else(|| RegistryError::UnknownWindow(id.clone()))
    }

    /// Resolves display metadata, substituting defaults and a placeholder panel for unknown ids.
    pub fn resolve(&self, id: &WindowKey) -> ResolvedWindow {
        match self.lookup(id) {
            Ok(descriptor) => ResolvedWindow {
                id: descriptor.id.clone(),
                title: descriptor.title.clone(),
                icon_glyph: descriptor.icon_glyph.clone(),
                content: descriptor.content(),
                is_fallback: false,
            },
            Err(RegistryError::UnknownWindow(id)) => ResolvedWindow {
                title: FALLBACK_TITLE.to_string(),
                icon_glyph: FALLBACK_ICON_GLYPH.to_string(),
                content: ContentPanel::Placeholder {
                    id: id.clone(),
                    title: FALLBACK_TITLE.to_string(),
                },
                id,
                is_fallback: true,
            },
        }
    }
}
