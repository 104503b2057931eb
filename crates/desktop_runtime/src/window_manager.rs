//! Pure window-manager geometry and ordering helpers used by the desktop reducer.

use crate::{
    config::DesktopConfig,
    model::{DesktopState, PlacementSeed, Point, Size, Viewport, WindowKey},
};

/// Clamps a window origin so the whole window stays inside the viewport, above the taskbar.
///
/// When the window is larger than the available area the origin is pinned to `0` on that axis.
pub fn clamp_to_viewport(position: Point, size: Size, viewport: Viewport) -> Point {
    let max_x = viewport.width - size.width;
    let max_y = viewport.height - size.height - viewport.taskbar_height;
    Point {
        x: clamp_axis(position.x, max_x),
        y: clamp_axis(position.y, max_y),
    }
}

fn clamp_axis(value: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let max = if max.is_finite() { max } else { 0.0 };
    value.min(max).max(0.0)
}

/// Maps a placement seed into the configured spawn band.
pub fn initial_position(seed: PlacementSeed, config: &DesktopConfig) -> Point {
    Point {
        x: spawn_axis(seed.x_unit, config.spawn_x_min, config.spawn_x_max),
        y: spawn_axis(seed.y_unit, config.spawn_y_min, config.spawn_y_max),
    }
}

fn spawn_axis(unit: f64, min: f64, max: f64) -> f64 {
    let unit = if unit.is_finite() {
        unit.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let value = min + unit * (max - min);
    // Keep the band half-open even for `unit == 1.0`.
    if value >= max && max > min {
        max - f64::EPSILON * max.abs().max(1.0)
    } else {
        value
    }
}

/// Focus bonus actually applied; never smaller than the number of open windows so the focused
/// window always outranks every other one.
pub fn effective_focus_bonus(state: &DesktopState, config: &DesktopConfig) -> u32 {
    let open = u32::try_from(state.open_order.len()).unwrap_or(u32::MAX);
    config.focus_bonus.max(open)
}

/// Z-index for an open window: base plus open-order rank, plus the focus bonus when focused.
pub fn stack_index(state: &DesktopState, config: &DesktopConfig, id: &WindowKey) -> Option<u32> {
    let rank = u32::try_from(state.open_rank(id)?).unwrap_or(u32::MAX);
    let bonus = if state.is_focused(id) {
        effective_focus_bonus(state, config)
    } else {
        0
    };
    Some(config.stack_base.saturating_add(rank).saturating_add(bonus))
}

/// Window that inherits focus when the focused window `closed` is removed from `pre_order`.
///
/// Picks the element that was second-to-last before removal. When that element is `closed`
/// itself, picks the last surviving window instead. Returns `None` when nothing survives.
pub fn close_focus_successor(pre_order: &[WindowKey], closed: &WindowKey) -> Option<WindowKey> {
    if pre_order.len() < 2 {
        return None;
    }
    let candidate = &pre_order[pre_order.len() - 2];
    if candidate != closed {
        return Some(candidate.clone());
    }
    pre_order.iter().rev().find(|id| *id != closed).cloned()
}
