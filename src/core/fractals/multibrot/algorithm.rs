use crate::core::actions::sweep::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::multibrot::params::MultibrotParams;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Outcome of the escape loop for a single point.
///
/// `final_z` is kept because the smoothing step needs the magnitude at the
/// moment of escape, not just the iteration count.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    pub iterations: u32,
    pub final_z: Complex,
    pub escaped: bool,
}

/// Iterates z = z^n + c from z = 0 until |z| leaves the escape radius or
/// the iteration cap is reached.
///
/// The classic n = 2 case takes the componentwise fast path; any other
/// exponent goes through the polar form, where atan2(0, 0) = 0 keeps the
/// origin well-defined. Pure function of its arguments.
#[must_use]
pub fn escape_time(c: Complex, exponent: f64, max_iterations: u32) -> EscapeResult {
    let mut z = Complex::ZERO;
    let mut iterations = 0;

    while z.magnitude_squared() < ESCAPE_RADIUS_SQUARED && iterations < max_iterations {
        z = if exponent == 2.0 {
            z * z + c
        } else {
            z.powf_real(exponent) + c
        };
        iterations += 1;
    }

    EscapeResult {
        iterations,
        final_z: z,
        escaped: iterations < max_iterations,
    }
}

#[derive(Debug)]
pub struct MultibrotAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    params: MultibrotParams,
}

impl MultibrotAlgorithm {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, complex_rect: ComplexRect, params: MultibrotParams) -> Self {
        Self {
            pixel_rect,
            complex_rect,
            params,
        }
    }

    #[must_use]
    pub fn params(&self) -> MultibrotParams {
        self.params
    }
}

impl FractalAlgorithm for MultibrotAlgorithm {
    type Success = EscapeResult;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(escape_time(
            c,
            self.params.exponent(),
            self.params.max_iterations(),
        ))
    }
}
