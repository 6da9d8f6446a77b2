pub mod hot_gradient;
pub mod power_norm;
