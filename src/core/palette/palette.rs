use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    TooFewColours { size: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewColours { size } => {
                write!(f, "palette needs at least 2 colours, got {}", size)
            }
        }
    }
}

impl Error for PaletteError {}

/// Ordered colour ramp, generated once per run and immutable afterward.
///
/// Interpolation always needs a neighbouring entry, so a palette holds at
/// least two colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    pub fn new(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        if colours.len() < 2 {
            return Err(PaletteError::TooFewColours {
                size: colours.len(),
            });
        }

        Ok(Self { colours })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Looks up an entry, wrapping out-of-range indices around the ramp.
    #[must_use]
    pub fn colour(&self, index: usize) -> Colour {
        self.colours[index % self.colours.len()]
    }
}
