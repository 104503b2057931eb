//! Typed host-domain seams used by the desktop runtime.
//!
//! The runtime never samples wall-clock time, randomness or the browser viewport directly.
//! It reads them through the small service traits in this crate, bundled in [`HostServices`],
//! so tests can inject fixed values and the browser build can use `js_sys`/`web_sys`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod random;
pub mod time;
pub mod viewport;

pub use host::HostServices;
pub use random::{BrowserRandom, RandomSource, SequenceRandom};
pub use time::{unix_time_ms_now, Clock, ClockSnapshot, FixedClock, SystemClock};
pub use viewport::{BrowserViewport, FixedViewport, ViewportSize, ViewportSource};
