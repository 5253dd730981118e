use crate::core::data::colour::Colour;
use crate::core::palette::palette::{Palette, PaletteError};
use crate::core::util::affine_scale::affine_scale;

/// Builds a deterministic palette ramping from black towards blue-green.
///
/// Slots index into a fixed 0..=255 ramp regardless of palette size, so a
/// small palette samples only the dark end of the gradient. Red climbs at
/// half the rate of green and blue.
pub fn gradient_scaled_palette(size: usize) -> Result<Palette, PaletteError> {
    let mut colours = Vec::with_capacity(size);

    for slot in 0..size {
        let position = slot as f64;
        let r = affine_scale(position, 0.0, 255.0, 0.0, 128.0)
            .trunc()
            .clamp(0.0, 255.0) as u8;
        let g = affine_scale(position, 0.0, 255.0, 0.0, 255.0)
            .trunc()
            .clamp(0.0, 255.0) as u8;
        let b = slot.min(255) as u8;

        colours.push(Colour { r, g, b });
    }

    Palette::new(colours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_is_deterministic() {
        let first = gradient_scaled_palette(10).unwrap();
        let second = gradient_scaled_palette(10).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_slot_zero_is_black() {
        let palette = gradient_scaled_palette(10).unwrap();

        assert_eq!(palette.colour(0), Colour::BLACK);
    }

    #[test]
    fn test_red_climbs_at_half_rate() {
        let palette = gradient_scaled_palette(10).unwrap();

        assert_eq!(palette.colour(5), Colour { r: 2, g: 5, b: 5 });
        assert_eq!(palette.colour(9), Colour { r: 4, g: 9, b: 9 });
    }

    #[test]
    fn test_channels_saturate_past_the_ramp_end() {
        let palette = gradient_scaled_palette(300).unwrap();

        assert_eq!(palette.colour(299), Colour { r: 150, g: 255, b: 255 });
    }

    #[test]
    fn test_too_small_palette_is_rejected() {
        assert_eq!(
            gradient_scaled_palette(1),
            Err(PaletteError::TooFewColours { size: 1 })
        );
    }
}
