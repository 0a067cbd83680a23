//! ChartEngine - chart option generation for the editor preview
//!
//! Turns a chart type, a `{categories, series}` data set and a partial option
//! overlay into the declarative option object the rendering library draws.
//! Usable as a plain Rust library or from JavaScript through the
//! `wasm-bindgen` exports below.

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod export;
pub mod handler;
pub mod mapper;
pub mod ohlc;
pub mod option;
pub mod stats;
pub mod validate;

pub use config::MapperConfig;
pub use error::{EngineError, Result};
pub use export::{export_json, parse_data_set};
pub use handler::ChartEngine;
pub use mapper::{generate_option, generate_option_for_tag, ChartMapper};
pub use option::ChartOption;
pub use validate::{validate, validate_tag};

// Re-export types
pub use studio_types::*;

/// Initialize the chart engine
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Debug).ok();

    log::info!("ChartEngine initialized");
}

/// Plain JS objects rather than `Map`s for JSON objects
fn to_js<T: Serialize>(value: &T) -> std::result::Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Generate a chart option; unknown type tags map as line charts
#[wasm_bindgen(js_name = generateOption)]
pub fn generate_option_js(
    chart_type: &str,
    data: DataSet,
    overlay: ChartOptionOverlay,
) -> std::result::Result<JsValue, JsError> {
    to_js(&generate_option_for_tag(chart_type, &data, &overlay))
}

/// Generate a chart option for a saved chart
#[wasm_bindgen(js_name = renderConfig)]
pub fn render_config_js(config: ChartConfig) -> std::result::Result<JsValue, JsError> {
    to_js(&ChartMapper::default().render_config(&config))
}

#[wasm_bindgen(js_name = validateData)]
pub fn validate_data_js(chart_type: &str, data: DataSet) -> std::result::Result<JsValue, JsError> {
    to_js(&validate_tag(chart_type, &data))
}

#[wasm_bindgen(js_name = chartCatalog)]
pub fn chart_catalog_js() -> std::result::Result<JsValue, JsError> {
    to_js(&catalog())
}

#[wasm_bindgen(js_name = sampleData)]
pub fn sample_data_js(chart_type: ChartType) -> DataSet {
    DataSet::sample_for(chart_type)
}

#[wasm_bindgen(js_name = tableToData)]
pub fn table_to_data_js(table: DataTable) -> DataSet {
    DataSet::from_table(&table)
}

#[wasm_bindgen(js_name = dataToTable)]
pub fn data_to_table_js(data: DataSet) -> DataTable {
    data.to_table()
}

#[wasm_bindgen(js_name = exportJson)]
pub fn export_json_js(
    chart_type: &str,
    data: DataSet,
    overlay: ChartOptionOverlay,
    pretty: bool,
) -> std::result::Result<String, JsError> {
    let option = generate_option_for_tag(chart_type, &data, &overlay);
    export_json(&option, pretty).map_err(|e| JsError::new(&e.to_string()))
}

/// Read a data set from imported JSON text
#[wasm_bindgen(js_name = importData)]
pub fn import_data_js(json: &str) -> std::result::Result<DataSet, JsError> {
    parse_data_set(json).map_err(|e| JsError::new(&e.to_string()))
}

/// Handle a JSON-encoded `Request<ChartRequest>`
#[wasm_bindgen(js_name = handleRequest)]
pub fn handle_request_js(json: &str) -> std::result::Result<String, JsError> {
    ChartEngine::default()
        .handle_json(json)
        .map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen]
impl ChartEngine {
    /// Engine with host-supplied tunables; `{}` selects the defaults
    #[wasm_bindgen(constructor)]
    pub fn create(config: MapperConfig) -> ChartEngine {
        ChartEngine::with_config(config)
    }

    #[wasm_bindgen(js_name = generateOption)]
    pub fn generate_js(
        &self,
        chart_type: &str,
        data: DataSet,
        overlay: ChartOptionOverlay,
    ) -> std::result::Result<JsValue, JsError> {
        to_js(&self.mapper().generate_for_tag(chart_type, &data, &overlay))
    }

    #[wasm_bindgen(js_name = renderConfig)]
    pub fn render_config_js(&self, config: ChartConfig) -> std::result::Result<JsValue, JsError> {
        to_js(&self.mapper().render_config(&config))
    }

    #[wasm_bindgen(js_name = handleRequest)]
    pub fn handle_request_js(&self, json: &str) -> std::result::Result<String, JsError> {
        self.handle_json(json)
            .map_err(|e| JsError::new(&e.to_string()))
    }
}
