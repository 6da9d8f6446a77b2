/// A device-space position on the sample grid, in pixels.
///
/// `x` grows to the right (columns), `y` grows downward (rows).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
