//! Viewport size queries.

use serde::{Deserialize, Serialize};

const FALLBACK_WIDTH: f64 = 1024.0;
const FALLBACK_HEIGHT: f64 = 768.0;

/// Inner size of the browser window in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: FALLBACK_WIDTH,
            height: FALLBACK_HEIGHT,
        }
    }
}

/// Source of the current viewport size.
pub trait ViewportSource {
    /// Samples the current viewport size.
    fn viewport_size(&self) -> ViewportSize;
}

/// Reads `window.innerWidth`/`innerHeight`, falling back to 1024x768 off the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl ViewportSource for BrowserViewport {
    fn viewport_size(&self) -> ViewportSize {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .unwrap_or(FALLBACK_WIDTH);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .unwrap_or(FALLBACK_HEIGHT);
                return ViewportSize { width, height };
            }
        }

        ViewportSize::default()
    }
}

/// Viewport with a constant size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub ViewportSize);

impl ViewportSource for FixedViewport {
    fn viewport_size(&self) -> ViewportSize {
        self.0
    }
}
