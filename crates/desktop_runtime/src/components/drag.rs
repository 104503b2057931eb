//! Document-wide pointer listeners that live exactly as long as a window drag.

use std::{cell::RefCell, rc::Rc};

use leptos::{ev, leptos_dom::helpers::WindowListenerHandle, window_event_listener};

use super::{pointer_from_pointer_event, DesktopRuntimeContext};
use crate::{model::WindowKey, reducer::DesktopAction};

/// Shared holder for the live listener guard of one window.
///
/// Cloning shares the slot, so the window's cleanup hook and the listeners themselves can both
/// release it.
pub(super) struct ListenerSlot<G> {
    inner: Rc<RefCell<Option<G>>>,
}

impl<G> Clone for ListenerSlot<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<G> Default for ListenerSlot<G> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(None)),
        }
    }
}

impl<G> ListenerSlot<G> {
    /// Stores `guard`, dropping any guard left over from an earlier drag.
    pub(super) fn replace(&self, guard: G) {
        let previous = self.inner.borrow_mut().replace(guard);
        drop(previous);
    }

    /// Drops the stored guard, if any. Returns whether one was held.
    pub(super) fn release(&self) -> bool {
        let guard = self.inner.borrow_mut().take();
        guard.is_some()
    }

    /// Empties the slot, runs `finish`, then drops the guard.
    ///
    /// The slot is already empty while `finish` runs, so a re-entrant drag start from `finish`
    /// installs into a clean slot.
    pub(super) fn finish_with(&self, finish: impl FnOnce()) {
        let guard = self.inner.borrow_mut().take();
        finish();
        drop(guard);
    }

    pub(super) fn is_empty(&self) -> bool {
        self.inner.borrow().is_none()
    }
}

pub(super) type DragSlot = ListenerSlot<DragListenerGuard>;

/// Owns the `pointermove`/`pointerup`/`pointercancel` listeners installed for a drag.
///
/// Dropping the guard removes every listener.
pub(super) struct DragListenerGuard {
    handles: Vec<WindowListenerHandle>,
}

impl DragListenerGuard {
    pub(super) fn install(runtime: DesktopRuntimeContext, id: WindowKey, slot: DragSlot) -> Self {
        let move_id = id.clone();
        let on_move = window_event_listener(ev::pointermove, move |ev| {
            runtime.dispatch_action(DesktopAction::DragTo {
                id: move_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
                viewport: runtime.viewport(),
            });
        });

        let release = move || {
            slot.finish_with(|| {
                runtime.dispatch_action(DesktopAction::EndDrag { id: id.clone() });
            });
        };
        let release_cancel = release.clone();
        let on_up = window_event_listener(ev::pointerup, move |_| release());
        let on_cancel = window_event_listener(ev::pointercancel, move |_| release_cancel());

        Self {
            handles: vec![on_move, on_up, on_cancel],
        }
    }
}

impl Drop for DragListenerGuard {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}
