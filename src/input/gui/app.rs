//! Event loop application and the input translation it relies on.

pub mod events;
pub mod gui_app;
pub mod navigation_input;
pub mod ports;
