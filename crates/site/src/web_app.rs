use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host::HostServices;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Joan's Desktop" />
        <Meta name="description" content="A retro desktop-style personal portfolio." />

        <Router>
            <main class="site-root">
                <Routes>
                    // Every path lands on the desktop; there are no deep links into windows.
                    <Route path="/*any" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=HostServices::browser()>
            <DesktopShell />
        </DesktopProvider>
    }
}
