// src/error.rs
use thiserror::Error;

use crate::emitter::EmitterState;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("emitter lifecycle violation: {op} called in {state:?} state")]
    Lifecycle { op: &'static str, state: EmitterState },

    #[error("config error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
