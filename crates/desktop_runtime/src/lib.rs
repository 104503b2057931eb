//! Retro desktop window manager: content registry, window entities, the desktop controller
//! reducer and the Leptos shell that renders them.

mod catalog;
pub mod components;
pub mod config;
pub mod model;
pub mod projection;
pub mod reducer;
pub mod registry;
mod runtime_context;
pub mod window_manager;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{desktop_config, DesktopConfig};
pub use model::*;
pub use projection::{
    launcher_icons, taskbar_entries, window_surface, LauncherIcon, TaskbarEntry, WindowSurface,
};
pub use reducer::{reduce_desktop, DesktopAction, Transition, WindowControl};
pub use registry::{ContentPanel, ContentRegistry, RegistryError, ResolvedWindow, WindowDescriptor};
pub use window_manager::{clamp_to_viewport, close_focus_successor, stack_index};
