use std::ops::{Add, Mul};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Raises the number to an arbitrary real power using the polar form:
    /// `r^n * (cos(n*theta) + i*sin(n*theta))` with `theta = atan2(imag, real)`.
    ///
    /// `atan2(0, 0)` is 0 by convention, so zero raised to a positive power
    /// stays zero rather than producing NaN.
    #[must_use]
    pub fn powf_real(self, exponent: f64) -> Complex {
        let r = self.magnitude_squared().powf(exponent / 2.0);
        let theta = exponent * self.imag.atan2(self.real);

        Complex {
            real: r * theta.cos(),
            imag: r * theta.sin(),
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}
