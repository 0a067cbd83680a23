//! Engine error types

use studio_types::{ErrorCode, UnknownChartType};
use thiserror::Error;

/// Failures at the engine's edges
///
/// Option generation itself never fails; only decoding requests and encoding
/// output can.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownChartType(#[from] UnknownChartType),
}

impl EngineError {
    /// Error code reported back to the host
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::Json(e) if e.is_data() || e.is_syntax() || e.is_eof() => {
                ErrorCode::ParseError
            }
            EngineError::Json(_) => ErrorCode::SerializationError,
            EngineError::UnknownChartType(_) => ErrorCode::UnknownChartType,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
