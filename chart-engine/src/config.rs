//! Mapper configuration

use serde::{Deserialize, Serialize};
use tsify::Tsify;

/// Tunables for option generation
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Tsify, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct MapperConfig {
    /// Radar indicator max as a multiple of the largest datum
    #[serde(default = "default_radar_headroom")]
    pub radar_headroom: f64,
    /// Pie outer radius
    #[serde(default = "default_pie_radius")]
    pub pie_radius: String,
    /// Scatter symbol size in pixels
    #[serde(default = "default_symbol_size")]
    pub scatter_symbol_size: f64,
    /// Seed for synthetic candlestick jitter
    #[serde(default = "default_ohlc_seed")]
    pub ohlc_seed: u64,
    /// Candlestick jitter as a fraction of each value's magnitude
    #[serde(default = "default_ohlc_jitter")]
    pub ohlc_jitter: f64,
}

fn default_radar_headroom() -> f64 {
    1.2
}
fn default_pie_radius() -> String {
    "50%".to_string()
}
fn default_symbol_size() -> f64 {
    10.0
}
fn default_ohlc_seed() -> u64 {
    0x5EED_0C1C
}
fn default_ohlc_jitter() -> f64 {
    0.05
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            radar_headroom: default_radar_headroom(),
            pie_radius: default_pie_radius(),
            scatter_symbol_size: default_symbol_size(),
            ohlc_seed: default_ohlc_seed(),
            ohlc_jitter: default_ohlc_jitter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config: MapperConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MapperConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config: MapperConfig = serde_json::from_str(r#"{"ohlc_seed": 7}"#).unwrap();
        assert_eq!(config.ohlc_seed, 7);
        assert_eq!(config.radar_headroom, 1.2);
    }
}
