//! Desktop shell UI composition and interaction surfaces.

mod drag;
mod launcher;
mod panels;
mod taskbar;
mod window;

use leptos::*;

use self::{launcher::DesktopIcon, taskbar::Taskbar, window::DesktopWindow};

use crate::{model::Point, projection::launcher_icons};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the desktop: launcher icons, open windows and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let icons = launcher_icons(runtime.registry);

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
        >
            <div class="desktop-icon-layer" data-ui-kind="desktop-icon-grid">
                {icons
                    .into_iter()
                    .map(|icon| view! { <DesktopIcon icon=icon /> })
                    .collect_view()}
            </div>

            <div class="desktop-window-layer" data-ui-kind="desktop-window-layer">
                <For
                    each=move || state.get().open_order
                    key=|id| id.clone()
                    let:id
                >
                    <DesktopWindow id=id />
                </For>
            </div>

            <Taskbar />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}
