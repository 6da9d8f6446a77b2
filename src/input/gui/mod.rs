//! Windowed front end: winit for the window and event loop, pixels for the
//! framebuffer.

pub mod app;
pub mod commands;
pub mod errors;
