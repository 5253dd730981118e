use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::multibrot::algorithm::EscapeResult;
use crate::core::fractals::multibrot::smoothing::smooth_iteration_count;
use crate::core::palette::palette::Palette;
use std::error::Error;

/// Maps escape results onto a palette using the smoothed iteration count.
///
/// The integer part of the smoothed count selects a palette entry and the
/// fractional part blends towards the next entry, wrapping from the last
/// entry back to the first. Points that never escape get a fixed interior
/// colour instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultibrotSmoothColourMap {
    palette: Palette,
    interior_colour: Colour,
}

impl MultibrotSmoothColourMap {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self::with_interior_colour(palette, Colour::BLACK)
    }

    #[must_use]
    pub fn with_interior_colour(palette: Palette, interior_colour: Colour) -> Self {
        Self {
            palette,
            interior_colour,
        }
    }

    #[must_use]
    pub fn colour_for(&self, result: EscapeResult) -> Colour {
        if !result.escaped {
            return self.interior_colour;
        }

        self.colour_for_smooth(smooth_iteration_count(result))
    }

    /// Blends between the two palette entries bracketing `smooth`.
    ///
    /// Total over all inputs: the saturating float-to-integer cast pins huge
    /// counts to the last representable index and negative or NaN counts to
    /// index 0, and the blend factor is clamped inside [`Colour::lerp`].
    #[must_use]
    pub fn colour_for_smooth(&self, smooth: f64) -> Colour {
        let len = self.palette.len();
        let index = (smooth.floor() as u64 % len as u64) as usize;
        let next_index = (index + 1) % len;

        Colour::lerp(
            self.palette.colour(index),
            self.palette.colour(next_index),
            smooth.fract(),
        )
    }
}

impl ColourMap<EscapeResult> for MultibrotSmoothColourMap {
    fn map(&self, value: EscapeResult) -> Result<Colour, Box<dyn Error>> {
        Ok(self.colour_for(value))
    }

    fn display_name(&self) -> &str {
        "Smooth palette"
    }
}
