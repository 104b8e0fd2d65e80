//! The two-message contract between a caller and the generation worker.
//!
//! Requests travel as JSON text, e.g.
//! `{"kind":"GENERATE_POINTS","params":{"dimension":64,"power":8,"maxIterations":80}}`.
//! A successful response is the raw byte view of an `f32` array of xyz triples;
//! a failure is the bare text sentinel `"ERROR"`.

pub mod errors;
pub mod request;
pub mod response;

pub use errors::ProtocolError;
pub use request::{GENERATE_POINTS_KIND, GenerationRequest, decode_request, encode_request};
pub use response::{
    FAILURE_SENTINEL, GenerationResponse, WirePayload, decode_response, encode_response,
};
