use crate::controllers::interactive::events::render::RenderEvent;

/// Receives the outcome of every render, in generation order.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
