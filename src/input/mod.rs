//! Input adapters for the explorer.
//!
//! Each adapter receives input from its source and translates it into
//! navigation commands for the interactive controller.

#[cfg(feature = "gui")]
pub mod gui;
