use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::Receiver;

use thiserror::Error;
use tracing::info;

use crate::controllers::coordinator::{
    GenerationCoordinator, GenerationError, GenerationEvent, GenerationPresenterPort,
};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::point_buffer::PointBuffer;
use crate::core::fractals::mandelbulb::params::GenerationParams;
use crate::presenters::channel::ChannelPresenter;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("generation {generation} failed: {source}")]
    Generation {
        generation: u64,
        #[source]
        source: GenerationError,
    },
    #[error("coordinator stopped without answering generation {0}")]
    NoResponse(u64),
    #[error("nothing has been generated yet")]
    NothingGenerated,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Runs one request through the coordinator and writes the result to disk.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    coordinator: GenerationCoordinator,
    events: Receiver<GenerationEvent>,
    points: Option<PointBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        let (channel, events) = ChannelPresenter::new();
        let coordinator =
            GenerationCoordinator::new(Arc::new(channel) as Arc<dyn GenerationPresenterPort>);

        Self {
            presenter,
            coordinator,
            events,
            points: None,
        }
    }

    pub fn generate(&mut self, params: GenerationParams) -> Result<&PointBuffer, CliError> {
        let generation = self.coordinator.submit(params);

        loop {
            let event = self
                .events
                .recv()
                .map_err(|_| CliError::NoResponse(generation))?;

            if event.generation() != generation {
                continue;
            }

            return match event {
                GenerationEvent::Completed(data) => {
                    info!(
                        generation,
                        points = data.points.point_count(),
                        duration = ?data.duration,
                        "point cloud ready"
                    );
                    Ok(&*self.points.insert(data.points))
                }
                GenerationEvent::Failed(failure) => Err(CliError::Generation {
                    generation,
                    source: failure.error,
                }),
            };
        }
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), CliError> {
        let points = self.points.as_ref().ok_or(CliError::NothingGenerated)?;
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        self.presenter.present(points, filepath)?;
        info!(path = %filepath.display(), "wrote point cloud");

        Ok(())
    }
}
