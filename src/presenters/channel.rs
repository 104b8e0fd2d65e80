use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::debug;

use crate::controllers::coordinator::events::GenerationEvent;
use crate::controllers::coordinator::ports::presenter::GenerationPresenterPort;

/// Forwards coordinator events over an mpsc channel.
pub struct ChannelPresenter {
    sender: Mutex<Sender<GenerationEvent>>,
}

impl ChannelPresenter {
    #[must_use]
    pub fn new() -> (Self, Receiver<GenerationEvent>) {
        let (sender, receiver) = mpsc::channel();

        (
            Self {
                sender: Mutex::new(sender),
            },
            receiver,
        )
    }
}

impl GenerationPresenterPort for ChannelPresenter {
    fn present(&self, event: GenerationEvent) {
        let generation = event.generation();
        let sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);

        if sender.send(event).is_err() {
            debug!(generation, "event receiver dropped");
        }
    }
}
