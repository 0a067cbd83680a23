//! Request dispatch for the host message channel

use studio_types::{
    catalog, ChartRequest, ChartResponse, DataSet, ErrorCode, MessageResult, Request, Response,
    Timestamp,
};

use wasm_bindgen::prelude::*;

use crate::config::MapperConfig;
use crate::error::Result;
use crate::export::{export_json, parse_data_set};
use crate::mapper::ChartMapper;
use crate::validate::validate_tag;

/// Milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or_default()
}

/// Answers [`ChartRequest`]s with a shared mapper
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct ChartEngine {
    mapper: ChartMapper,
}

impl ChartEngine {
    pub fn new(mapper: ChartMapper) -> Self {
        Self { mapper }
    }

    pub fn with_config(config: MapperConfig) -> Self {
        log::debug!("engine configured with {config:?}");
        Self::new(ChartMapper::new(config))
    }

    pub fn mapper(&self) -> &ChartMapper {
        &self.mapper
    }

    /// Handle one request, reporting failures inside the response
    pub fn handle(&self, request: Request<ChartRequest>) -> Response<ChartResponse> {
        let started = now_ms();
        let result = match self.dispatch(request.payload) {
            Ok(response) => MessageResult::ok(response),
            Err(e) => {
                log::error!("request {} failed: {e}", request.id);
                MessageResult::error(e.code(), e.to_string())
            }
        };
        let finished = now_ms();

        Response {
            id: request.id,
            timestamp: finished as Timestamp,
            execution_time_ms: (finished - started).max(0.0) as u32,
            result,
        }
    }

    /// Decode a JSON request, handle it and encode the response
    ///
    /// A request that does not decode still gets an error response, with an
    /// empty ID.
    pub fn handle_json(&self, json: &str) -> Result<String> {
        let response = match serde_json::from_str::<Request<ChartRequest>>(json) {
            Ok(request) => self.handle(request),
            Err(e) => {
                log::warn!("dropping malformed request: {e}");
                Response {
                    id: String::new(),
                    timestamp: now_ms() as Timestamp,
                    execution_time_ms: 0,
                    result: MessageResult::error_with_details(
                        ErrorCode::ParseError,
                        "malformed request",
                        e.to_string(),
                    ),
                }
            }
        };
        Ok(serde_json::to_string(&response)?)
    }

    fn dispatch(&self, payload: ChartRequest) -> Result<ChartResponse> {
        let response = match payload {
            ChartRequest::Generate {
                chart_type,
                data,
                overlay,
            } => {
                let option = self.mapper.generate_for_tag(&chart_type, &data, &overlay);
                ChartResponse::Generated {
                    option: option.into_value(),
                }
            }
            ChartRequest::RenderConfig { config } => ChartResponse::Generated {
                option: self.mapper.render_config(&config).into_value(),
            },
            ChartRequest::Validate { chart_type, data } => ChartResponse::Diagnostics {
                diagnostics: validate_tag(&chart_type, &data),
            },
            ChartRequest::Catalog => ChartResponse::Catalog { entries: catalog() },
            ChartRequest::Sample { chart_type } => ChartResponse::Sample {
                data: DataSet::sample_for(chart_type),
            },
            ChartRequest::ExportJson {
                chart_type,
                data,
                overlay,
                pretty,
            } => {
                let option = self.mapper.generate_for_tag(&chart_type, &data, &overlay);
                ChartResponse::Json {
                    text: export_json(&option, pretty)?,
                }
            }
            ChartRequest::ImportData { text } => ChartResponse::Imported {
                data: parse_data_set(&text)?,
            },
        };
        Ok(response)
    }
}
