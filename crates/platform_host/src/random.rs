//! Unit-interval random source used for jittered window placement.

use std::cell::Cell;

/// Source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_unit(&self) -> f64;
}

/// `Math.random()` in the browser. Native builds have no page to place windows on and report
/// the band midpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Math::random()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            0.5
        }
    }
}

/// Replays a fixed sequence of values, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: Cell<usize>,
}

impl SequenceRandom {
    /// Creates a source cycling through `values`. An empty sequence always yields `0.0`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: Cell::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let idx = self.cursor.get();
        self.cursor.set((idx + 1) % self.values.len());
        self.values[idx]
    }
}
