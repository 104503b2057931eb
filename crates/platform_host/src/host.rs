//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{BrowserRandom, BrowserViewport, Clock, RandomSource, SystemClock, ViewportSource};

/// Runtime-selected host service bundle.
///
/// Environment-specific selection happens before this bundle crosses into `desktop_runtime`,
/// which keeps the window manager free of browser globals.
#[derive(Clone)]
pub struct HostServices {
    /// Wall-clock source for the taskbar clock.
    pub clock: Rc<dyn Clock>,
    /// Unit-interval random source used for initial window placement.
    pub random: Rc<dyn RandomSource>,
    /// Current drawable viewport size.
    pub viewport: Rc<dyn ViewportSource>,
}

impl HostServices {
    /// Browser-backed services.
    pub fn browser() -> Self {
        Self {
            clock: Rc::new(SystemClock),
            random: Rc::new(BrowserRandom),
            viewport: Rc::new(BrowserViewport),
        }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::browser()
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("viewport", &self.viewport.viewport_size())
            .finish_non_exhaustive()
    }
}
