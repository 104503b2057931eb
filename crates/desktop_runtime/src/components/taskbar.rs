use super::*;
use crate::{
    model::WindowKey,
    projection::{format_clock_aria, format_clock_date, format_clock_time, taskbar_entries},
    reducer::DesktopAction,
};

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let entries = create_memo(move |_| taskbar_entries(&state.get(), runtime.registry));
    let clock_now = create_rw_signal(runtime.host.with_value(|host| host.clock.now()));

    let refresh = runtime.config.with_value(|config| config.clock_refresh());
    match set_interval_with_handle(
        move || clock_now.set(runtime.host.with_value(|host| host.clock.now())),
        refresh,
    ) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("taskbar clock interval failed: {err:?}"),
    }

    let focus_window = move |id: WindowKey| runtime.dispatch_action(DesktopAction::Focus { id });

    view! {
        <footer class="taskbar" data-ui-kind="taskbar" role="toolbar" aria-label="Taskbar">
            <button type="button" class="taskbar-start" aria-label="Start">
                <span class="taskbar-start-glyph" aria-hidden="true"></span>
                "Start"
            </button>

            <div class="taskbar-running" data-ui-slot="running">
                <For
                    each=move || entries.get()
                    key=|entry| (entry.id.clone(), entry.active)
                    let:entry
                >
                    {{
                        let id = entry.id.clone();
                        view! {
                            <button
                                type="button"
                                class={if entry.active { "taskbar-window active" } else { "taskbar-window" }}
                                aria-pressed=entry.active.to_string()
                                title=entry.title.clone()
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    focus_window(id.clone());
                                }
                            >
                                <span class="taskbar-window-icon" aria-hidden="true">
                                    {entry.icon_glyph.clone()}
                                </span>
                                <span class="taskbar-window-title">{entry.title.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="taskbar-tray" data-ui-slot="tray">
                <button type="button" class="tray-button" aria-label="Volume">"🔊"</button>
                <button type="button" class="tray-button" aria-label="Network">"📶"</button>
                <button type="button" class="tray-button" aria-label="Calendar">"📅"</button>
                <div
                    class="taskbar-clock"
                    role="timer"
                    aria-label=move || format_clock_aria(clock_now.get())
                >
                    <div class="taskbar-clock-time">
                        {move || format_clock_time(clock_now.get())}
                    </div>
                    <div class="taskbar-clock-date">
                        {move || format_clock_date(clock_now.get())}
                    </div>
                </div>
            </div>
        </footer>
    }
}
