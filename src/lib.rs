mod config;
mod controllers;
mod core;
mod presenters;
mod telemetry;

pub use config::{Cli, OutputFormat};
pub use controllers::cli::{CliController, CliError};
pub use controllers::coordinator::{
    CoordinatorState, GenerationCoordinator, GenerationError, GenerationEvent, GenerationFailure,
    GenerationPresenterPort, PointsData,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::protocol::{
    FAILURE_SENTINEL, GENERATE_POINTS_KIND, GenerationRequest, GenerationResponse, ProtocolError,
    WirePayload, decode_request, decode_response, encode_request, encode_response,
};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::data::point_buffer::{PointBuffer, PointBufferError};
pub use crate::core::fractals::mandelbulb::errors::MandelbulbError;
pub use crate::core::fractals::mandelbulb::params::{GenerationParams, MAX_DIMENSION};
pub use crate::core::fractals::mandelbulb::sampler::{generate, generate_cancelable};
pub use presenters::channel::ChannelPresenter;
pub use presenters::file::ply::PlyFilePresenter;
pub use presenters::file::raw::RawF32FilePresenter;
pub use telemetry::init_tracing;
