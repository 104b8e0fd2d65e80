//! Single-flight generation coordinator.
//!
//! Requests are queued in submission order and run one at a time on a worker
//! thread, with the point sweep itself sharded across the rayon pool. Every
//! submission, including one that fails to decode, is answered with exactly one
//! [`GenerationEvent`] through a [`GenerationPresenterPort`].

mod coordinator;
pub mod errors;
pub mod events;
pub mod ports;

pub use coordinator::{CoordinatorState, GenerationCoordinator};
pub use errors::GenerationError;
pub use events::{GenerationEvent, GenerationFailure, PointsData};
pub use ports::presenter::GenerationPresenterPort;
