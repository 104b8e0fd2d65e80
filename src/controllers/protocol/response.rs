use crate::controllers::protocol::errors::ProtocolError;
use crate::core::data::point_buffer::{COMPONENTS_PER_POINT, PointBuffer};

pub const FAILURE_SENTINEL: &str = "ERROR";

const BYTES_PER_POINT: usize = COMPONENTS_PER_POINT * size_of::<f32>();

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResponse {
    Points(PointBuffer),
    Failed,
}

/// A response as it crosses the boundary: binary for points, text for failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WirePayload {
    Binary(Vec<u8>),
    Text(String),
}

#[must_use]
pub fn encode_response(response: &GenerationResponse) -> WirePayload {
    match response {
        GenerationResponse::Points(points) => WirePayload::Binary(points.as_bytes().to_vec()),
        GenerationResponse::Failed => WirePayload::Text(FAILURE_SENTINEL.to_string()),
    }
}

pub fn decode_response(payload: &WirePayload) -> Result<GenerationResponse, ProtocolError> {
    match payload {
        WirePayload::Binary(bytes) => {
            if bytes.len() % BYTES_PER_POINT != 0 {
                return Err(ProtocolError::IncompletePayload { len: bytes.len() });
            }

            // Copies rather than casts, so the byte vector need not be f32-aligned.
            let points = bytemuck::pod_collect_to_vec::<u8, [f32; 3]>(bytes);

            Ok(GenerationResponse::Points(PointBuffer::from_points(points)))
        }
        WirePayload::Text(text) if text == FAILURE_SENTINEL => Ok(GenerationResponse::Failed),
        WirePayload::Text(text) => Err(ProtocolError::UnknownSentinel(text.clone())),
    }
}
