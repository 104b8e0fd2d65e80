use crate::controllers::coordinator::events::GenerationEvent;

pub trait GenerationPresenterPort: Send + Sync {
    fn present(&self, event: GenerationEvent);
}
