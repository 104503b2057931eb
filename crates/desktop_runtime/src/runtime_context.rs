//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container and the injected host services. UI
//! composition stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    config::{desktop_config, DesktopConfig},
    model::{DesktopState, PlacementSeed, Viewport, WindowKey},
    reducer::{reduce_desktop, DesktopAction},
    registry::ContentRegistry,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host clock, random and viewport services.
    pub host: StoredValue<HostServices>,
    /// Layout configuration for this desktop instance.
    pub config: StoredValue<DesktopConfig>,
    /// Static window metadata.
    pub registry: &'static ContentRegistry,
    /// Reactive window-manager state.
    pub state: RwSignal<DesktopState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Opens (or re-focuses) `id` with a freshly sampled placement seed.
    pub fn open_window(&self, id: WindowKey) {
        let placement = self.host.with_value(|host| {
            PlacementSeed::new(host.random.next_unit(), host.random.next_unit())
        });
        self.dispatch_action(DesktopAction::Open { id, placement });
    }

    /// Current drag clamp area.
    pub fn viewport(&self) -> Viewport {
        let size = self.host.with_value(|host| host.viewport.viewport_size());
        self.config.with_value(|config| config.viewport(size))
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
///
/// State always starts empty; nothing is restored across reloads.
pub fn DesktopProvider(
    /// Injected host services. Defaults to the browser-backed bundle.
    #[prop(optional)]
    host_services: Option<HostServices>,
    /// Layout override. Defaults to the embedded catalog layout.
    #[prop(optional)]
    config: Option<DesktopConfig>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host_services.unwrap_or_default());
    let config = store_value(config.unwrap_or_else(|| desktop_config().clone()));
    let state = create_rw_signal(DesktopState::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        if !matches!(action, DesktopAction::Open { .. }) && !desktop.is_open(action.target()) {
            logging::debug_warn!("ignoring {action:?}: window is not open");
            return;
        }

        let transition = config.with_value(|config| reduce_desktop(&mut desktop, config, action));
        if transition.is_changed() {
            state.set(desktop);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        config,
        registry: ContentRegistry::builtin(),
        state,
        dispatch,
    };

    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
