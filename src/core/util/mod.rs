pub mod linspace;
pub mod pixel_to_data_coords;
