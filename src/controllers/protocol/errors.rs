use thiserror::Error;

use crate::core::fractals::mandelbulb::errors::MandelbulbError;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("unrecognized request kind {0:?}")]
    UnrecognizedKind(String),
    #[error("request is missing its params")]
    MissingParams,
    #[error("malformed message: {0}")]
    InvalidShape(#[from] serde_json::Error),
    #[error("invalid generation params: {0}")]
    InvalidParams(#[from] MandelbulbError),
    #[error("point payload of {len} bytes is not a whole number of xyz triples")]
    IncompletePayload { len: usize },
    #[error("unrecognized text response {0:?}")]
    UnknownSentinel(String),
}
