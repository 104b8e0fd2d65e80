use serde::{Deserialize, Serialize};

use crate::controllers::protocol::errors::ProtocolError;
use crate::core::fractals::mandelbulb::errors::MandelbulbError;
use crate::core::fractals::mandelbulb::params::GenerationParams;

pub const GENERATE_POINTS_KIND: &str = "GENERATE_POINTS";

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GenerationRequest {
    GeneratePoints(GenerationParams),
}

impl GenerationRequest {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GeneratePoints(_) => GENERATE_POINTS_KIND,
        }
    }

    #[must_use]
    pub fn params(&self) -> &GenerationParams {
        match self {
            Self::GeneratePoints(params) => params,
        }
    }
}

/// Params as they appear on the wire. Signed so that negative values reach
/// validation instead of failing as a shape error.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireParams {
    #[serde(alias = "dim")]
    dimension: i64,
    #[serde(alias = "nPower")]
    power: f64,
    max_iterations: i64,
}

impl From<&GenerationParams> for WireParams {
    fn from(params: &GenerationParams) -> Self {
        Self {
            dimension: i64::from(params.dimension()),
            power: params.power(),
            max_iterations: i64::from(params.max_iterations()),
        }
    }
}

impl WireParams {
    fn into_params(self) -> Result<GenerationParams, MandelbulbError> {
        GenerationParams::from_signed(self.dimension, self.power, self.max_iterations)
    }
}

#[derive(Debug, Deserialize)]
struct IncomingEnvelope {
    #[serde(alias = "type")]
    kind: String,
    #[serde(default, alias = "data")]
    params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct OutgoingEnvelope<'a> {
    kind: &'a str,
    params: WireParams,
}

/// Decodes a JSON request. The discriminator is checked before the params, so an
/// unknown `kind` is reported as such even when the params are also bad.
pub fn decode_request(message: &str) -> Result<GenerationRequest, ProtocolError> {
    let envelope: IncomingEnvelope = serde_json::from_str(message)?;

    if envelope.kind != GENERATE_POINTS_KIND {
        return Err(ProtocolError::UnrecognizedKind(envelope.kind));
    }

    let params = envelope.params.ok_or(ProtocolError::MissingParams)?;
    let wire: WireParams = serde_json::from_value(params)?;

    Ok(GenerationRequest::GeneratePoints(wire.into_params()?))
}

pub fn encode_request(request: &GenerationRequest) -> Result<String, ProtocolError> {
    let envelope = OutgoingEnvelope {
        kind: request.kind(),
        params: WireParams::from(request.params()),
    };

    Ok(serde_json::to_string(&envelope)?)
}
