use thiserror::Error;

use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewBoundsError {
    #[error("view bounds must satisfy xmin < xmax and ymin < ymax: x [{xmin}, {xmax}], y [{ymin}, {ymax}]")]
    Inverted {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },
}

/// Visible rectangle of the complex plane.
///
/// `x` runs along the real axis (grid columns), `y` along the imaginary axis
/// (grid rows).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewBounds {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl ViewBounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, ViewBoundsError> {
        // Written as negated `<` so NaN edges are rejected too.
        if !(xmin < xmax) || !(ymin < ymax) {
            return Err(ViewBoundsError::Inverted {
                xmin,
                xmax,
                ymin,
                ymax,
            });
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    /// Bounds of the given size centred on `centre`.
    ///
    /// Not validated: a negative or zero size yields inverted or empty bounds,
    /// which is what a degenerate zoom factor produces.
    #[must_use]
    pub fn centred_on(centre: Complex, width: f64, height: f64) -> Self {
        Self {
            xmin: centre.real - width / 2.0,
            xmax: centre.real + width / 2.0,
            ymin: centre.imag - height / 2.0,
            ymax: centre.imag + height / 2.0,
        }
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn centre(&self) -> Complex {
        Complex {
            real: (self.xmin + self.xmax) / 2.0,
            imag: (self.ymin + self.ymax) / 2.0,
        }
    }

    /// Edges are inclusive.
    pub fn contains_point(&self, point: Complex) -> bool {
        self.xmin <= point.real
            && point.real <= self.xmax
            && self.ymin <= point.imag
            && point.imag <= self.ymax
    }
}
