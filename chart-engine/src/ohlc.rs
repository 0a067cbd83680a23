//! Synthetic candlestick data
//!
//! The editor's data model carries a single scalar per category, so candles
//! are demo data: each one is built around the scalar with bounded jitter.
//! Nothing here models real price series.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded generator of `[open, close, low, high]` candles
#[derive(Debug)]
pub struct OhlcSynth {
    rng: SmallRng,
    jitter: f64,
}

impl OhlcSynth {
    pub fn new(seed: u64, jitter: f64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            jitter,
        }
    }

    /// Candle in the rendering library's `[open, close, lowest, highest]` order
    ///
    /// With `spread = jitter * |value|`: the close lies within `spread` of the
    /// open, and the wicks extend at most `spread` beyond the body. A `NaN`
    /// value yields an all-`NaN` candle.
    pub fn candle(&mut self, value: f64) -> [f64; 4] {
        let spread = value.abs() * self.jitter;
        let drift: f64 = self.rng.random_range(-1.0..=1.0);
        let low_wick: f64 = self.rng.random();
        let high_wick: f64 = self.rng.random();

        let open = value;
        let close = value + drift * spread;
        let low = open.min(close) - low_wick * spread;
        let high = open.max(close) + high_wick * spread;
        [open, close, low, high]
    }
}
