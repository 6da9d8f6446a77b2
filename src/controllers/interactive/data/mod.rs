pub mod frame_data;
pub mod navigation_command;
pub mod viewport_state;
