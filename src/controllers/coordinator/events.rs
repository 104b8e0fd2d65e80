use std::time::Duration;

use crate::controllers::coordinator::errors::GenerationError;
use crate::controllers::protocol::response::GenerationResponse;
use crate::core::data::point_buffer::PointBuffer;

#[derive(Debug)]
pub struct PointsData {
    pub generation: u64,
    pub points: PointBuffer,
    pub duration: Duration,
}

#[derive(Debug)]
pub struct GenerationFailure {
    pub generation: u64,
    pub error: GenerationError,
}

/// Exactly one of these is presented for every submission.
#[derive(Debug)]
pub enum GenerationEvent {
    Completed(PointsData),
    Failed(GenerationFailure),
}

impl GenerationEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Completed(data) => data.generation,
            Self::Failed(failure) => failure.generation,
        }
    }

    #[must_use]
    pub fn into_response(self) -> GenerationResponse {
        match self {
            Self::Completed(data) => GenerationResponse::Points(data.points),
            Self::Failed(_) => GenerationResponse::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::protocol::errors::ProtocolError;

    #[test]
    fn test_completed_maps_to_points_response() {
        let points = PointBuffer::from_data(vec![0.1, 0.2, 0.3]).unwrap();
        let event = GenerationEvent::Completed(PointsData {
            generation: 4,
            points: points.clone(),
            duration: Duration::from_millis(3),
        });

        assert_eq!(event.generation(), 4);
        assert_eq!(event.into_response(), GenerationResponse::Points(points));
    }

    #[test]
    fn test_every_failure_collapses_to_failed_response() {
        let errors = [
            GenerationError::Malformed(ProtocolError::UnrecognizedKind("X".to_string())),
            GenerationError::Cancelled,
            GenerationError::ShutDown,
        ];

        for (generation, error) in (1..).zip(errors) {
            let event = GenerationEvent::Failed(GenerationFailure { generation, error });

            assert_eq!(event.generation(), generation);
            assert_eq!(event.into_response(), GenerationResponse::Failed);
        }
    }

    #[test]
    fn test_error_display() {
        let err = GenerationError::Malformed(ProtocolError::UnrecognizedKind("X".to_string()));

        assert_eq!(err.to_string(), "malformed request: unrecognized request kind \"X\"");
    }
}
