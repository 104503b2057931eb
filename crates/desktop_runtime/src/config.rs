//! Desktop layout configuration.
//!
//! The built-in values come from the `[layout]` table of `desktop.toml`, validated by the build
//! script. [`DesktopConfig::default`] mirrors that table so pure logic can be exercised without
//! the embedded catalog.

use std::time::Duration;

use platform_host::ViewportSize;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::builtin_catalog,
    model::{Size, Viewport},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Height reserved for the taskbar at the bottom of the viewport.
    pub taskbar_height: f64,
    pub window_width: f64,
    pub window_height: f64,
    /// Half-open band `[spawn_x_min, spawn_x_max)` for the initial x of a new window.
    pub spawn_x_min: f64,
    pub spawn_x_max: f64,
    /// Half-open band `[spawn_y_min, spawn_y_max)` for the initial y of a new window.
    pub spawn_y_min: f64,
    pub spawn_y_max: f64,
    pub stack_base: u32,
    pub focus_bonus: u32,
    pub clock_refresh_ms: u64,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            taskbar_height: 60.0,
            window_width: 600.0,
            window_height: 400.0,
            spawn_x_min: 200.0,
            spawn_x_max: 500.0,
            spawn_y_min: 100.0,
            spawn_y_max: 300.0,
            stack_base: 1000,
            focus_bonus: 100,
            clock_refresh_ms: 1000,
        }
    }
}

impl DesktopConfig {
    pub fn window_size(&self) -> Size {
        Size::new(self.window_width, self.window_height)
    }

    pub fn viewport(&self, size: ViewportSize) -> Viewport {
        Viewport::new(size.width, size.height, self.taskbar_height)
    }

    pub fn clock_refresh(&self) -> Duration {
        Duration::from_millis(self.clock_refresh_ms.max(1))
    }
}

/// Returns the built-in layout configuration from the embedded catalog.
pub fn desktop_config() -> &'static DesktopConfig {
    &builtin_catalog().layout
}
