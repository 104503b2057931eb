//! Time source seam for live UI clocks.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Broken-down local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    /// Full year, e.g. `2024`.
    pub year: u32,
    /// Month of year, `1..=12`.
    pub month: u32,
    /// Day of month, `1..=31`.
    pub day: u32,
    /// Hour of day, `0..=23`.
    pub hour: u32,
    /// Minute, `0..=59`.
    pub minute: u32,
    /// Second, `0..=59`.
    pub second: u32,
}

impl ClockSnapshot {
    /// Converts a unix millisecond timestamp into a UTC snapshot.
    pub fn from_unix_ms(unix_ms: u64) -> Self {
        let secs = unix_ms / 1000;
        let days = (secs / 86_400) as i64;
        let rem = secs % 86_400;
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: (rem / 3600) as u32,
            minute: ((rem % 3600) / 60) as u32,
            second: (rem % 60) as u32,
        }
    }
}

// Howard Hinnant's days-to-civil conversion for the proleptic Gregorian calendar.
fn civil_from_days(days: i64) -> (u32, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year.max(0) as u32, month as u32, day as u32)
}

/// Substitutable wall-clock source.
pub trait Clock {
    /// Samples the current wall-clock time. The timezone is host-defined: browser local time
    /// on wasm, UTC for the native [`SystemClock`].
    fn now(&self) -> ClockSnapshot;
}

/// Host clock: `js_sys::Date` in the browser, UTC system time elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockSnapshot {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            ClockSnapshot {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            ClockSnapshot::from_unix_ms(unix_time_ms_now())
        }
    }
}

/// Clock pinned to a single instant. Advance it with [`FixedClock::set`].
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: Cell<ClockSnapshot>,
}

impl FixedClock {
    /// Creates a clock that always reports `snapshot`.
    pub fn new(snapshot: ClockSnapshot) -> Self {
        Self {
            current: Cell::new(snapshot),
        }
    }

    /// Replaces the reported instant.
    pub fn set(&self, snapshot: ClockSnapshot) {
        self.current.set(snapshot);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> ClockSnapshot {
        self.current.get()
    }
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}
