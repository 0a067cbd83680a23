//! Message envelopes between the editor host and the chart engine

use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::chart::{ChartCatalogEntry, ChartConfig, ChartType};
use crate::data::DataSet;
use crate::overlay::ChartOptionOverlay;

/// Unique identifier for message correlation
pub type MessageId = String;

/// Timestamp in milliseconds since Unix epoch
pub type Timestamp = u64;

/// Base message envelope for all requests
#[derive(Tsify, Serialize, Deserialize, Clone, Debug)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct Request<T> {
    /// Unique message ID for request/response matching
    pub id: MessageId,
    /// Request timestamp
    pub timestamp: Timestamp,
    /// Request payload
    pub payload: T,
}

/// Base message envelope for all responses
#[derive(Tsify, Serialize, Deserialize, Clone, Debug)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct Response<T> {
    /// Matches the request ID
    pub id: MessageId,
    /// Response timestamp
    pub timestamp: Timestamp,
    /// Execution time in milliseconds
    pub execution_time_ms: u32,
    /// Response result
    pub result: MessageResult<T>,
}

/// Result wrapper for all responses
#[derive(Tsify, Serialize, Deserialize, Clone, Debug)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(tag = "status")]
pub enum MessageResult<T> {
    #[serde(rename = "ok")]
    Ok { data: T },
    #[serde(rename = "error")]
    Error { error: ErrorInfo },
}

/// Error information
#[derive(Tsify, Serialize, Deserialize, Clone, Debug)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct ErrorInfo {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Standard error codes
#[derive(Tsify, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub enum ErrorCode {
    /// Request could not be decoded
    ParseError,
    /// Output could not be encoded
    SerializationError,
    /// Chart type tag not recognized
    UnknownChartType,
}

impl<T> MessageResult<T> {
    /// Create a success result
    pub fn ok(data: T) -> Self {
        MessageResult::Ok { data }
    }

    /// Create an error result
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        MessageResult::Error {
            error: ErrorInfo {
                code,
                message: message.into(),
                details: None,
            },
        }
    }

    /// Create an error result with details
    pub fn error_with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        MessageResult::Error {
            error: ErrorInfo {
                code,
                message: message.into(),
                details: Some(details.into()),
            },
        }
    }

    /// Check if result is ok
    pub fn is_ok(&self) -> bool {
        matches!(self, MessageResult::Ok { .. })
    }

    /// Check if result is error
    pub fn is_error(&self) -> bool {
        matches!(self, MessageResult::Error { .. })
    }
}

// ============================================================================
// Chart Engine Payloads
// ============================================================================

/// Commands sent to the chart engine
///
/// Chart types travel as raw tags so that unrecognized tags reach the
/// engine's line-chart fallback instead of failing to decode.
#[derive(Tsify, Serialize, Deserialize, Clone, Debug)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(tag = "type", content = "payload")]
pub enum ChartRequest {
    /// Map data and overlay to a chart option
    #[serde(rename = "generate")]
    Generate {
        chart_type: String,
        data: DataSet,
        #[serde(default)]
        overlay: ChartOptionOverlay,
    },

    /// Render a saved chart configuration
    #[serde(rename = "render_config")]
    RenderConfig { config: ChartConfig },

    /// Check data against a chart type
    #[serde(rename = "validate")]
    Validate { chart_type: String, data: DataSet },

    /// List available chart types
    #[serde(rename = "catalog")]
    Catalog,

    /// Starter data for a chart type
    #[serde(rename = "sample")]
    Sample { chart_type: ChartType },

    /// Generate an option and return it as JSON text
    #[serde(rename = "export_json")]
    ExportJson {
        chart_type: String,
        data: DataSet,
        #[serde(default)]
        overlay: ChartOptionOverlay,
        #[serde(default)]
        pretty: bool,
    },

    /// Read a data set from imported JSON text
    #[serde(rename = "import_data")]
    ImportData { text: String },
}

/// Responses emitted by the chart engine
#[derive(Tsify, Serialize, Deserialize, Clone, Debug)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(tag = "type", content = "payload")]
pub enum ChartResponse {
    /// Generated chart option
    #[serde(rename = "option")]
    Generated { option: serde_json::Value },

    /// Validation findings
    #[serde(rename = "diagnostics")]
    Diagnostics { diagnostics: Vec<Diagnostic> },

    /// Chart picker entries
    #[serde(rename = "catalog")]
    Catalog { entries: Vec<ChartCatalogEntry> },

    /// Starter data
    #[serde(rename = "sample")]
    Sample { data: DataSet },

    /// Exported option text
    #[serde(rename = "json")]
    Json { text: String },

    /// Imported data set
    #[serde(rename = "data")]
    Imported { data: DataSet },
}

// ============================================================================
// Diagnostics
// ============================================================================

/// How much a diagnostic matters to the user
#[derive(Tsify, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// Data problem the mapper tolerates but the user may want to fix
#[derive(Tsify, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Chart type tag fell back to a line chart
    UnknownChartType { tag: String },
    /// Data set has no series at all
    NoSeries,
    /// Series has no values
    EmptySeries { series: String },
    /// Series length differs from the category count
    RaggedSeries {
        series: String,
        expected: usize,
        actual: usize,
    },
    /// Series holds a gap or non-finite number
    NonFiniteValue { series: String, index: usize },
    /// Two series share a name
    DuplicateSeriesName { name: String },
    /// Chart is keyed by categories but none were given
    MissingCategories,
    /// Sankey needs at least two categories to draw a link
    TooFewCategories { required: usize, actual: usize },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::NonFiniteValue { .. } | Diagnostic::DuplicateSeriesName { .. } => {
                Severity::Info
            }
            Diagnostic::UnknownChartType { .. }
            | Diagnostic::NoSeries
            | Diagnostic::EmptySeries { .. }
            | Diagnostic::RaggedSeries { .. }
            | Diagnostic::MissingCategories
            | Diagnostic::TooFewCategories { .. } => Severity::Warning,
        }
    }
}
