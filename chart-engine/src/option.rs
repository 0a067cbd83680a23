//! Generated chart option

use std::ops::Index;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// Declarative option object handed to the rendering library
///
/// Serializes as the bare JSON object. Indexing a missing key yields `null`,
/// like `serde_json::Value`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct ChartOption(Map<String, Value>);

impl ChartOption {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Output series, empty when absent
    pub fn series(&self) -> &[Value] {
        self.0
            .get("series")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_cartesian_axes(&self) -> bool {
        self.0.contains_key("xAxis") && self.0.contains_key("yAxis")
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl Index<&str> for ChartOption {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(&NULL)
    }
}

impl From<ChartOption> for Value {
    fn from(option: ChartOption) -> Self {
        option.into_value()
    }
}
