use super::{
    drag::{DragListenerGuard, DragSlot},
    panels::render_panel,
    *,
};
use crate::{
    model::WindowKey,
    projection::window_surface,
    reducer::{DesktopAction, WindowControl},
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(id: WindowKey) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let resolved = runtime.registry.resolve(&id);
    if resolved.is_fallback {
        logging::warn!("no window descriptor for `{id}`; rendering placeholder content");
    }

    let surface = {
        let id = id.clone();
        create_memo(move |_| {
            let desktop = runtime.state.get();
            runtime
                .config
                .with_value(|config| window_surface(&desktop, config, &id))
        })
    };

    let drag_slot = DragSlot::default();
    {
        let drag_slot = drag_slot.clone();
        on_cleanup(move || {
            drag_slot.release();
        });
    }

    let focus = {
        let id = id.clone();
        move |_: web_sys::PointerEvent| {
            let already_focused = surface.get_untracked().map(|s| s.focused).unwrap_or(true);
            if !already_focused {
                runtime.dispatch_action(DesktopAction::Focus { id: id.clone() });
            }
        }
    };
    let begin_drag = {
        let id = id.clone();
        move |ev: web_sys::PointerEvent| {
            if ev.button() != 0 {
                return;
            }
            if ev.pointer_type() != "mouse" && !ev.is_primary() {
                return;
            }
            try_set_pointer_capture(&ev);
            ev.prevent_default();
            ev.stop_propagation();
            runtime.dispatch_action(DesktopAction::BeginDrag {
                id: id.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
            drag_slot.replace(DragListenerGuard::install(
                runtime,
                id.clone(),
                drag_slot.clone(),
            ));
        }
    };
    // Controls focus their window but must not start a drag from the title bar.
    let control_pointerdown = {
        let focus = focus.clone();
        move || {
            let focus = focus.clone();
            move |ev: web_sys::PointerEvent| {
                ev.stop_propagation();
                focus(ev);
            }
        }
    };
    let control = {
        let id = id.clone();
        move |control: WindowControl| {
            runtime.dispatch_action(DesktopAction::WindowControl {
                id: id.clone(),
                control,
            });
        }
    };
    let minimize = control.clone();
    let maximize = control.clone();
    let close = control;

    let class = move || {
        let Some(surface) = surface.get() else {
            return "desktop-window".to_string();
        };
        format!(
            "desktop-window{}{}",
            if surface.focused { " focused" } else { "" },
            if surface.dragging { " dragging" } else { "" }
        )
    };
    let style = move || surface.get().map(|s| s.style()).unwrap_or_default();

    view! {
        <section
            class=class
            style=style
            on:pointerdown=focus
            role="dialog"
            aria-label=resolved.title.clone()
            data-ui-kind="window-frame"
            data-window-id=id.to_string()
        >
            <header class="titlebar window-header" on:pointerdown=begin_drag>
                <div class="titlebar-title">
                    <span class="titlebar-app-icon" aria-hidden="true">
                        {resolved.icon_glyph.clone()}
                    </span>
                    <span>{resolved.title.clone()}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        aria-label="Minimize window"
                        on:pointerdown=control_pointerdown()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            minimize(WindowControl::Minimize);
                        }
                    >
                        "—"
                    </button>
                    <button
                        type="button"
                        aria-label="Maximize window"
                        on:pointerdown=control_pointerdown()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            maximize(WindowControl::Maximize);
                        }
                    >
                        "□"
                    </button>
                    <button
                        type="button"
                        class="close"
                        aria-label="Close window"
                        on:pointerdown=control_pointerdown()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            close(WindowControl::Close);
                        }
                    >
                        "✕"
                    </button>
                </div>
            </header>
            <div class="window-body">{render_panel(&resolved.content)}</div>
        </section>
    }
}
