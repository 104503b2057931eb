//! Read-only projections of [`DesktopState`] consumed by the view layer.

use platform_host::ClockSnapshot;

use crate::{
    config::DesktopConfig,
    model::{DesktopState, Point, Size, WindowKey},
    registry::ContentRegistry,
    window_manager::stack_index,
};

/// One taskbar button.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskbarEntry {
    pub id: WindowKey,
    pub title: String,
    pub icon_glyph: String,
    pub active: bool,
}

/// Taskbar buttons in open order, resolved through the registry.
pub fn taskbar_entries(state: &DesktopState, registry: &ContentRegistry) -> Vec<TaskbarEntry> {
    state
        .open_order
        .iter()
        .map(|id| {
            let resolved = registry.resolve(id);
            TaskbarEntry {
                active: state.is_focused(id),
                id: resolved.id,
                title: resolved.title,
                icon_glyph: resolved.icon_glyph,
            }
        })
        .collect()
}

/// One desktop launcher icon at its design-time position.
#[derive(Debug, Clone, PartialEq)]
pub struct LauncherIcon {
    pub id: WindowKey,
    pub label: String,
    pub icon_glyph: String,
    pub position: Point,
}

pub fn launcher_icons(registry: &ContentRegistry) -> Vec<LauncherIcon> {
    registry
        .descriptors()
        .iter()
        .map(|descriptor| LauncherIcon {
            id: descriptor.id.clone(),
            label: descriptor.title.clone(),
            icon_glyph: descriptor.icon_glyph.clone(),
            position: descriptor.icon_position(),
        })
        .collect()
}

/// Geometry and stacking of one window frame. Title and body come from the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSurface {
    pub id: WindowKey,
    pub position: Point,
    pub size: Size,
    pub z_index: u32,
    pub focused: bool,
    pub dragging: bool,
}

impl WindowSurface {
    pub fn style(&self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            self.position.x, self.position.y, self.size.width, self.size.height, self.z_index
        )
    }
}

pub fn window_surface(
    state: &DesktopState,
    config: &DesktopConfig,
    id: &WindowKey,
) -> Option<WindowSurface> {
    let window = state.window(id)?;
    let z_index = stack_index(state, config, id)?;
    Some(WindowSurface {
        id: window.id.clone(),
        position: window.position,
        size: window.size,
        z_index,
        focused: state.is_focused(id),
        dragging: window.is_dragging(),
    })
}

/// Taskbar time, `HH:MM` on a 24-hour clock.
pub fn format_clock_time(snapshot: ClockSnapshot) -> String {
    format!("{:02}:{:02}", snapshot.hour, snapshot.minute)
}

/// Taskbar date, US numeric `M/D/YYYY`.
pub fn format_clock_date(snapshot: ClockSnapshot) -> String {
    format!("{}/{}/{}", snapshot.month, snapshot.day, snapshot.year)
}

pub fn format_clock_aria(snapshot: ClockSnapshot) -> String {
    format!(
        "{}, {}",
        format_clock_date(snapshot),
        format_clock_time(snapshot)
    )
}
