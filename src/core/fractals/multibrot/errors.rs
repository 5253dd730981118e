use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum MultibrotError {
    ZeroMaxIterationsError,
    NonFiniteExponentError { exponent: f64 },
}

impl fmt::Display for MultibrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::NonFiniteExponentError { exponent } => {
                write!(f, "Exponent must be finite, got {}", exponent)
            }
        }
    }
}

impl Error for MultibrotError {}
