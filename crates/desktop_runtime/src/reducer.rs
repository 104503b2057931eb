//! Reducer actions and transition logic for the desktop window manager.

use crate::{
    config::DesktopConfig,
    model::{DesktopState, DragPhase, OpenWindow, PlacementSeed, Point, Viewport, WindowKey},
    window_manager::{clamp_to_viewport, close_focus_successor, initial_position},
};

/// Title-bar controls rendered on every window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowControl {
    /// Inert affordance.
    Minimize,
    /// Inert affordance.
    Maximize,
    Close,
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open `id` (or re-focus it when already open).
    Open {
        id: WindowKey,
        /// Jitter applied to the initial position of a newly created window.
        placement: PlacementSeed,
    },
    /// Close an open window.
    Close { id: WindowKey },
    /// Focus an open window.
    Focus { id: WindowKey },
    /// Pointer-down on a title bar: focus the window and start dragging it.
    BeginDrag { id: WindowKey, pointer: Point },
    /// Pointer moved while dragging.
    DragTo {
        id: WindowKey,
        pointer: Point,
        viewport: Viewport,
    },
    /// Pointer released anywhere in the document.
    EndDrag { id: WindowKey },
    /// Title-bar control activation.
    WindowControl {
        id: WindowKey,
        control: WindowControl,
    },
}

impl DesktopAction {
    /// Window targeted by this action.
    pub fn target(&self) -> &WindowKey {
        match self {
            Self::Open { id, .. }
            | Self::Close { id }
            | Self::Focus { id }
            | Self::BeginDrag { id, .. }
            | Self::DragTo { id, .. }
            | Self::EndDrag { id }
            | Self::WindowControl { id, .. } => id,
        }
    }
}

/// Outcome of a reducer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
}

impl Transition {
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }

    fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}

/// Applies a [`DesktopAction`] to the window-manager state.
///
/// This is the single state transition engine for open/close/focus/drag. It never fails:
/// actions that target a window that is not open leave the state untouched and report
/// [`Transition::Unchanged`].
pub fn reduce_desktop(
    state: &mut DesktopState,
    config: &DesktopConfig,
    action: DesktopAction,
) -> Transition {
    match action {
        DesktopAction::Open { id, placement } => {
            let mut changed = false;
            if !state.is_open(&id) {
                let position = initial_position(placement, config);
                state.windows.insert(
                    id.clone(),
                    OpenWindow::new(id.clone(), position, config.window_size()),
                );
                state.open_order.push(id.clone());
                changed = true;
            }
            changed |= set_focus(state, id);
            Transition::from_changed(changed)
        }
        DesktopAction::Close { id } => close_window(state, &id),
        DesktopAction::Focus { id } => {
            if !state.is_open(&id) {
                return Transition::Unchanged;
            }
            Transition::from_changed(set_focus(state, id))
        }
        DesktopAction::BeginDrag { id, pointer } => {
            let Some(window) = state.window_mut(&id) else {
                return Transition::Unchanged;
            };
            window.drag = DragPhase::Dragging {
                anchor: pointer - window.position,
            };
            set_focus(state, id);
            Transition::Changed
        }
        DesktopAction::DragTo {
            id,
            pointer,
            viewport,
        } => {
            let Some(window) = state.window_mut(&id) else {
                return Transition::Unchanged;
            };
            let DragPhase::Dragging { anchor } = window.drag else {
                return Transition::Unchanged;
            };
            let next = clamp_to_viewport(pointer - anchor, window.size, viewport);
            if next == window.position {
                return Transition::Unchanged;
            }
            window.position = next;
            Transition::Changed
        }
        DesktopAction::EndDrag { id } => match state.window_mut(&id) {
            Some(window) if window.is_dragging() => {
                window.drag = DragPhase::Idle;
                Transition::Changed
            }
            _ => Transition::Unchanged,
        },
        DesktopAction::WindowControl { id, control } => match control {
            WindowControl::Close => close_window(state, &id),
            WindowControl::Minimize | WindowControl::Maximize => Transition::Unchanged,
        },
    }
}

fn set_focus(state: &mut DesktopState, id: WindowKey) -> bool {
    if state.focused_id.as_ref() == Some(&id) {
        return false;
    }
    state.focused_id = Some(id);
    true
}

fn close_window(state: &mut DesktopState, id: &WindowKey) -> Transition {
    if state.windows.remove(id).is_none() {
        return Transition::Unchanged;
    }
    let pre_order = std::mem::take(&mut state.open_order);
    state.open_order = pre_order.iter().filter(|key| *key != id).cloned().collect();
    if state.focused_id.as_ref() == Some(id) {
        state.focused_id = close_focus_successor(&pre_order, id);
    }
    Transition::Changed
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Size;

    fn open(state: &mut DesktopState, id: &str) -> Transition {
        reduce_desktop(
            state,
            &DesktopConfig::default(),
            DesktopAction::Open {
                id: id.into(),
                placement: PlacementSeed::new(0.5, 0.5),
            },
        )
    }

    fn act(state: &mut DesktopState, action: DesktopAction) -> Transition {
        reduce_desktop(state, &DesktopConfig::default(), action)
    }

    fn order(state: &DesktopState) -> Vec<&str> {
        state.open_order.iter().map(WindowKey::as_str).collect()
    }

    #[test]
    fn open_appends_creates_entity_and_focuses() {
        let mut state = DesktopState::default();
        assert_eq!(open(&mut state, "about"), Transition::Changed);
        assert_eq!(open(&mut state, "contact"), Transition::Changed);

        assert_eq!(order(&state), vec!["about", "contact"]);
        assert_eq!(state.focused_id, Some("contact".into()));
        let window = state.window(&"contact".into()).expect("entity created");
        assert_eq!(window.position, Point::new(350.0, 200.0));
        assert_eq!(window.size, Size::new(600.0, 400.0));
        assert!(!window.is_dragging());
    }

    #[test]
    fn reopening_refocuses_without_duplicating_or_moving() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        open(&mut state, "contact");
        let before = state.window(&"about".into()).cloned();

        let transition = reduce_desktop(
            &mut state,
            &DesktopConfig::default(),
            DesktopAction::Open {
                id: "about".into(),
                placement: PlacementSeed::new(0.0, 0.9),
            },
        );

        assert_eq!(transition, Transition::Changed);
        assert_eq!(order(&state), vec!["about", "contact"]);
        assert_eq!(state.focused_id, Some("about".into()));
        assert_eq!(state.window(&"about".into()).cloned(), before);
        assert_eq!(open(&mut state, "about"), Transition::Unchanged);
    }

    #[test]
    fn open_accepts_unknown_ids() {
        let mut state = DesktopState::default();
        open(&mut state, "guestbook");
        assert_eq!(order(&state), vec!["guestbook"]);
        assert_eq!(state.focused_id, Some("guestbook".into()));
    }

    #[test]
    fn closing_unfocused_window_keeps_focus() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        open(&mut state, "contact");
        act(&mut state, DesktopAction::Close { id: "about".into() });
        assert_eq!(order(&state), vec!["contact"]);
        assert_eq!(state.focused_id, Some("contact".into()));
        assert!(state.window(&"about".into()).is_none());
    }

    #[test]
    fn closing_focused_top_window_focuses_previous() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        open(&mut state, "contact");
        open(&mut state, "resume");
        act(&mut state, DesktopAction::Close { id: "resume".into() });
        assert_eq!(order(&state), vec!["about", "contact"]);
        assert_eq!(state.focused_id, Some("contact".into()));
    }

    #[test]
    fn closing_focused_early_window_uses_literal_second_to_last() {
        // Documented quirk: focus goes to the pre-removal second-to-last window ("resume"),
        // not to the most recently opened survivor ("credits").
        let mut state = DesktopState::default();
        for id in ["about", "contact", "resume", "credits"] {
            open(&mut state, id);
        }
        act(&mut state, DesktopAction::Focus { id: "about".into() });
        act(&mut state, DesktopAction::Close { id: "about".into() });
        assert_eq!(order(&state), vec!["contact", "resume", "credits"]);
        assert_eq!(state.focused_id, Some("resume".into()));
    }

    #[test]
    fn closing_or_focusing_unopened_window_is_a_noop() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        let before = state.clone();
        assert_eq!(
            act(&mut state, DesktopAction::Close { id: "resume".into() }),
            Transition::Unchanged
        );
        assert_eq!(
            act(&mut state, DesktopAction::Focus { id: "resume".into() }),
            Transition::Unchanged
        );
        assert_eq!(state, before);
    }

    #[test]
    fn begin_drag_captures_anchor_and_focuses() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        open(&mut state, "contact");
        act(
            &mut state,
            DesktopAction::BeginDrag {
                id: "about".into(),
                pointer: Point::new(360.0, 210.0),
            },
        );
        let window = state.window(&"about".into()).unwrap();
        assert_eq!(window.drag_anchor(), Some(Point::new(10.0, 10.0)));
        assert_eq!(state.focused_id, Some("about".into()));
    }

    #[test]
    fn drag_moves_by_anchor_and_clamps_each_step() {
        let mut state = DesktopState::default();
        let viewport = Viewport::new(1000.0, 800.0, 60.0);
        open(&mut state, "about");
        act(
            &mut state,
            DesktopAction::BeginDrag {
                id: "about".into(),
                pointer: Point::new(360.0, 210.0),
            },
        );
        act(
            &mut state,
            DesktopAction::DragTo {
                id: "about".into(),
                pointer: Point::new(110.0, 60.0),
                viewport,
            },
        );
        assert_eq!(
            state.window(&"about".into()).unwrap().position,
            Point::new(100.0, 50.0)
        );

        act(
            &mut state,
            DesktopAction::DragTo {
                id: "about".into(),
                pointer: Point::new(-50.0, 900.0),
                viewport,
            },
        );
        assert_eq!(
            state.window(&"about".into()).unwrap().position,
            Point::new(0.0, 340.0)
        );
    }

    #[test]
    fn drag_events_without_active_drag_are_ignored() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        let before = state.clone();
        let viewport = Viewport::new(1000.0, 800.0, 60.0);
        assert_eq!(
            act(
                &mut state,
                DesktopAction::DragTo {
                    id: "about".into(),
                    pointer: Point::new(0.0, 0.0),
                    viewport,
                },
            ),
            Transition::Unchanged
        );
        assert_eq!(
            act(&mut state, DesktopAction::EndDrag { id: "about".into() }),
            Transition::Unchanged
        );
        assert_eq!(state, before);
    }

    #[test]
    fn end_drag_returns_to_idle() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        act(
            &mut state,
            DesktopAction::BeginDrag {
                id: "about".into(),
                pointer: Point::new(400.0, 250.0),
            },
        );
        assert_eq!(
            act(&mut state, DesktopAction::EndDrag { id: "about".into() }),
            Transition::Changed
        );
        assert!(!state.window(&"about".into()).unwrap().is_dragging());
    }

    #[test]
    fn minimize_and_maximize_are_inert() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        let before = state.clone();
        for control in [WindowControl::Minimize, WindowControl::Maximize] {
            assert_eq!(
                act(
                    &mut state,
                    DesktopAction::WindowControl {
                        id: "about".into(),
                        control,
                    },
                ),
                Transition::Unchanged
            );
        }
        assert_eq!(state, before);
    }

    #[test]
    fn close_control_closes_window() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        act(
            &mut state,
            DesktopAction::WindowControl {
                id: "about".into(),
                control: WindowControl::Close,
            },
        );
        assert!(state.open_order.is_empty());
        assert_eq!(state.focused_id, None);
    }

    #[test]
    fn closing_mid_drag_discards_entity() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        act(
            &mut state,
            DesktopAction::BeginDrag {
                id: "about".into(),
                pointer: Point::new(400.0, 250.0),
            },
        );
        act(&mut state, DesktopAction::Close { id: "about".into() });
        assert_eq!(
            act(&mut state, DesktopAction::EndDrag { id: "about".into() }),
            Transition::Unchanged
        );
        assert!(state.windows.is_empty());
    }
}
