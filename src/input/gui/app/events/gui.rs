/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A new render outcome is waiting in the presenter.
    ///
    /// The handler requests a redraw in response; the event itself draws
    /// nothing.
    Wake,
}
