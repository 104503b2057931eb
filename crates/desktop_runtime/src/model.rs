use std::collections::BTreeMap;
use std::fmt;
use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// Stable window identifier shared by the content catalog, the desktop icons and the taskbar.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowKey(pub String);

impl WindowKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WindowKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for WindowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Drawable area windows are clamped to. `taskbar_height` is reserved at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub taskbar_height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, taskbar_height: f64) -> Self {
        Self {
            width,
            height,
            taskbar_height,
        }
    }
}

/// Per-window pointer drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DragPhase {
    #[default]
    Idle,
    /// `anchor` is the pointer offset from the window origin captured at pointer-down.
    Dragging { anchor: Point },
}

/// A single open window surface. Owned by [`DesktopState::windows`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindow {
    pub id: WindowKey,
    pub position: Point,
    pub size: Size,
    pub drag: DragPhase,
}

impl OpenWindow {
    pub fn new(id: WindowKey, position: Point, size: Size) -> Self {
        Self {
            id,
            position,
            size,
            drag: DragPhase::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragPhase::Dragging { .. })
    }

    pub fn drag_anchor(&self) -> Option<Point> {
        match self.drag {
            DragPhase::Dragging { anchor } => Some(anchor),
            DragPhase::Idle => None,
        }
    }
}

/// Unit-interval sample pair used to jitter the initial placement of a new window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementSeed {
    pub x_unit: f64,
    pub y_unit: f64,
}

impl PlacementSeed {
    pub const fn new(x_unit: f64, y_unit: f64) -> Self {
        Self { x_unit, y_unit }
    }
}

impl Default for PlacementSeed {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Window-manager state: which windows exist, their open order and which one is focused.
///
/// Invariants maintained by [`crate::reduce_desktop`]:
/// - `open_order` has no duplicates;
/// - the key set of `windows` equals the members of `open_order`;
/// - `focused_id` is `None` or a member of `open_order`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesktopState {
    pub open_order: Vec<WindowKey>,
    pub focused_id: Option<WindowKey>,
    pub windows: BTreeMap<WindowKey, OpenWindow>,
}

impl DesktopState {
    pub fn is_open(&self, id: &WindowKey) -> bool {
        self.windows.contains_key(id)
    }

    pub fn is_focused(&self, id: &WindowKey) -> bool {
        self.focused_id.as_ref() == Some(id)
    }

    pub fn window(&self, id: &WindowKey) -> Option<&OpenWindow> {
        self.windows.get(id)
    }

    pub(crate) fn window_mut(&mut self, id: &WindowKey) -> Option<&mut OpenWindow> {
        self.windows.get_mut(id)
    }

    /// Position of `id` within the open order, which is also its base stacking rank.
    pub fn open_rank(&self, id: &WindowKey) -> Option<usize> {
        self.open_order.iter().position(|key| key == id)
    }

    /// Open windows in open order.
    pub fn open_windows(&self) -> impl Iterator<Item = &OpenWindow> + '_ {
        self.open_order.iter().filter_map(|id| self.windows.get(id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn open_windows_follow_open_order_not_key_order() {
        let mut state = DesktopState::default();
        for id in ["resume", "about", "contact"] {
            let key = WindowKey::from(id);
            state.windows.insert(
                key.clone(),
                OpenWindow::new(key.clone(), Point::default(), Size::new(600.0, 400.0)),
            );
            state.open_order.push(key);
        }

        let ids: Vec<&str> = state.open_windows().map(|window| window.id.as_str()).collect();
        assert_eq!(ids, vec!["resume", "about", "contact"]);
        assert_eq!(state.open_rank(&"about".into()), Some(1));
    }
}
