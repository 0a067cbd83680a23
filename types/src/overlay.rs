//! Caller-supplied option fragments merged under the generated option

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tsify::Tsify;

/// Partial chart option
///
/// Components are opaque JSON in the rendering library's schema. The mapper
/// uses the overlay as the base of its output and only overwrites the keys a
/// chart type needs to control.
#[derive(Tsify, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptionOverlay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolbox: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_zoom: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_map: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radar: Option<Value>,
    /// Color palette
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    /// Animation duration in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<u32>,
    /// Any other top-level option key
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartOptionOverlay {
    /// Set `title.text`, keeping any other title settings
    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        let mut title = match self.title.take() {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        title.insert("text".into(), Value::String(text.into()));
        self.title = Some(Value::Object(title));
        self
    }

    pub fn with_dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode = Some(dark);
        self
    }

    /// Flatten into a top-level option map with camelCase keys
    ///
    /// Only the fields that are set appear. Known fields win over `extra`
    /// entries with the same key.
    pub fn into_map(self) -> Map<String, Value> {
        let mut map = self.extra;
        let known = [
            ("title", self.title),
            ("tooltip", self.tooltip),
            ("legend", self.legend),
            ("grid", self.grid),
            ("xAxis", self.x_axis),
            ("yAxis", self.y_axis),
            ("toolbox", self.toolbox),
            ("dataZoom", self.data_zoom),
            ("visualMap", self.visual_map),
            ("radar", self.radar),
            ("color", self.color.map(Value::from)),
            ("backgroundColor", self.background_color.map(Value::from)),
            ("darkMode", self.dark_mode.map(Value::from)),
            ("animation", self.animation.map(Value::from)),
            ("animationDuration", self.animation_duration.map(Value::from)),
        ];
        for (key, value) in known {
            if let Some(value) = value {
                map.insert(key.to_string(), value);
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_map_uses_option_keys() {
        let overlay: ChartOptionOverlay = serde_json::from_value(json!({
            "title": {"text": "Sales"},
            "xAxis": {"name": "Day"},
            "darkMode": true,
            "color": ["#5470c6", "#91cc75"],
            "aria": {"enabled": true},
        }))
        .unwrap();
        let map = overlay.into_map();
        assert_eq!(map["title"], json!({"text": "Sales"}));
        assert_eq!(map["xAxis"], json!({"name": "Day"}));
        assert_eq!(map["darkMode"], json!(true));
        assert_eq!(map["color"], json!(["#5470c6", "#91cc75"]));
        assert_eq!(map["aria"], json!({"enabled": true}));
        assert!(!map.contains_key("tooltip"));
    }

    #[test]
    fn test_empty_overlay_is_empty_map() {
        assert!(ChartOptionOverlay::default().into_map().is_empty());
    }

    #[test]
    fn test_with_title_keeps_subtext() {
        let overlay = ChartOptionOverlay {
            title: Some(json!({"subtext": "weekly", "text": "old"})),
            ..Default::default()
        }
        .with_title("Traffic");
        assert_eq!(overlay.title, Some(json!({"subtext": "weekly", "text": "Traffic"})));
    }
}
