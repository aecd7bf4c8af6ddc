use num_complex::Complex64;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("complex rect corners must be finite: {top_left} to {bottom_right}")]
    NonFinite {
        top_left: Complex64,
        bottom_right: Complex64,
    },
}

/// An axis-aligned rectangle of the complex plane.
///
/// `top_left` holds the minimum real and imaginary parts and `bottom_right`
/// the maximums, matching pixel rows that grow downwards from `ymin`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex64,
    bottom_right: Complex64,
}

impl ComplexRect {
    pub fn new(top_left: Complex64, bottom_right: Complex64) -> Result<Self, ComplexRectError> {
        if !is_finite(top_left) || !is_finite(bottom_right) {
            return Err(ComplexRectError::NonFinite {
                top_left,
                bottom_right,
            });
        }

        let width = bottom_right.re - top_left.re;
        let height = bottom_right.im - top_left.im;

        if width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_bounds(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Result<Self, ComplexRectError> {
        Self::new(Complex64::new(x_min, y_min), Complex64::new(x_max, y_max))
    }

    /// Square window of side `span` centred on `center`.
    pub fn from_center(center: Complex64, span: f64) -> Result<Self, ComplexRectError> {
        let half_span = span / 2.0;

        Self::from_bounds(
            center.re - half_span,
            center.re + half_span,
            center.im - half_span,
            center.im + half_span,
        )
    }

    pub fn top_left(&self) -> Complex64 {
        self.top_left
    }

    pub fn bottom_right(&self) -> Complex64 {
        self.bottom_right
    }

    pub fn x_min(&self) -> f64 {
        self.top_left.re
    }

    pub fn x_max(&self) -> f64 {
        self.bottom_right.re
    }

    pub fn y_min(&self) -> f64 {
        self.top_left.im
    }

    pub fn y_max(&self) -> f64 {
        self.bottom_right.im
    }

    pub fn width(&self) -> f64 {
        self.bottom_right.re - self.top_left.re
    }

    pub fn height(&self) -> f64 {
        self.bottom_right.im - self.top_left.im
    }

    pub fn center(&self) -> Complex64 {
        Complex64::new(
            self.top_left.re + self.width() / 2.0,
            self.top_left.im + self.height() / 2.0,
        )
    }

    pub fn contains_point(&self, point: Complex64) -> bool {
        self.top_left.re <= point.re
            && self.top_left.im <= point.im
            && self.bottom_right.re >= point.re
            && self.bottom_right.im >= point.im
    }
}

fn is_finite(value: Complex64) -> bool {
    value.re.is_finite() && value.im.is_finite()
}
