use crate::core::fractals::multibrot::errors::MultibrotError;

pub const DEFAULT_EXPONENT: f64 = 2.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Settings for the iterated map z = z^n + c.
///
/// The exponent selects the family member: 2 is the classic Mandelbrot set,
/// other real values give Multibrot variants.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MultibrotParams {
    exponent: f64,
    max_iterations: u32,
}

impl MultibrotParams {
    pub fn new(exponent: f64, max_iterations: u32) -> Result<Self, MultibrotError> {
        if !exponent.is_finite() {
            return Err(MultibrotError::NonFiniteExponentError { exponent });
        }

        if max_iterations == 0 {
            return Err(MultibrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            exponent,
            max_iterations,
        })
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn set_exponent(&mut self, exponent: f64) -> Result<(), MultibrotError> {
        if !exponent.is_finite() {
            return Err(MultibrotError::NonFiniteExponentError { exponent });
        }

        self.exponent = exponent;
        Ok(())
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), MultibrotError> {
        if max_iterations == 0 {
            return Err(MultibrotError::ZeroMaxIterationsError);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }
}

impl Default for MultibrotParams {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_EXPONENT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
