use thiserror::Error;

use crate::controllers::protocol::errors::ProtocolError;

/// Why a submission ended in [`GenerationEvent::Failed`](super::events::GenerationEvent::Failed).
///
/// The wire contract collapses every variant into the single failure sentinel.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("malformed request: {0}")]
    Malformed(#[from] ProtocolError),
    #[error("generation cancelled")]
    Cancelled,
    #[error("coordinator shut down before the request completed")]
    ShutDown,
}
