use super::*;
use crate::projection::LauncherIcon;

#[component]
pub(super) fn DesktopIcon(icon: LauncherIcon) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let selected = create_rw_signal(false);
    let id = icon.id.clone();

    view! {
        <button
            type="button"
            class=move || {
                if selected.get() { "desktop-icon selected" } else { "desktop-icon" }
            }
            style=format!("left:{}px;top:{}px;", icon.position.x, icon.position.y)
            aria-label=icon.label.clone()
            aria-pressed=move || selected.get().to_string()
            data-ui-kind="desktop-icon-button"
            on:click=move |ev| {
                stop_mouse_event(&ev);
                selected.update(|value| *value = !*value);
            }
            on:dblclick=move |ev| {
                stop_mouse_event(&ev);
                runtime.open_window(id.clone());
            }
        >
            <span class="desktop-icon-glyph" aria-hidden="true">{icon.icon_glyph.clone()}</span>
            <span class="desktop-icon-label">{icon.label.clone()}</span>
        </button>
    }
}
