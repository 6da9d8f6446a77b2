pub mod algorithm;
pub mod colour_maps;
pub mod engine;
pub mod mandelbrot_config;
