use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
    NotFinite { top_left: Complex, bottom_right: Complex },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NotFinite {
                top_left,
                bottom_right,
            } => {
                write!(
                    f,
                    "complex rect corners must be finite: ({}, {}) to ({}, {})",
                    top_left.real, top_left.imag, bottom_right.real, bottom_right.imag
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned rectangle on the complex plane, the view a frame renders.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        if !top_left.real.is_finite()
            || !top_left.imag.is_finite()
            || !bottom_right.real.is_finite()
            || !bottom_right.imag.is_finite()
        {
            return Err(ComplexRectError::NotFinite {
                top_left,
                bottom_right,
            });
        }

        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }
}
