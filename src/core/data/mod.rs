pub mod colour;
pub mod complex;
pub mod escape_grid;
pub mod iteration_cap;
pub mod pixel_buffer;
pub mod point;
pub mod resolution;
pub mod view_bounds;
