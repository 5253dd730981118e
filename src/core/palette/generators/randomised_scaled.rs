use crate::core::data::colour::Colour;
use crate::core::palette::palette::{Palette, PaletteError};
use crate::core::util::affine_scale::affine_scale;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds a palette of randomised colours, each slot's channels drawn in a
/// magnitude proportional to the slot index and rescaled back into 0..=255.
///
/// Slot 0 has a degenerate scaling range and always comes out black, giving
/// the ramp a dark anchor. The `zero_blue` toggle forces the blue channel to
/// zero; the blue draw happens either way, so toggling the channel never
/// shifts the random sequence for red and green.
pub fn randomised_scaled_palette(
    size: usize,
    seed: u64,
    zero_blue: bool,
) -> Result<Palette, PaletteError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut colours = Vec::with_capacity(size);

    for slot in 0..size {
        let r = scaled_random_channel(&mut rng, slot);
        let g = scaled_random_channel(&mut rng, slot);
        let b = scaled_random_channel(&mut rng, slot);

        colours.push(Colour {
            r,
            g,
            b: if zero_blue { 0 } else { b },
        });
    }

    Palette::new(colours)
}

fn scaled_random_channel(rng: &mut StdRng, slot: usize) -> u8 {
    let span = 255.0 * slot as f64;
    let magnitude = (rng.r#gen::<f64>() * span).trunc();
    let rescaled = affine_scale(magnitude, 0.0, span, 0.0, 255.0);

    // Slot 0 rescales over an empty range; treat the non-finite result as 0
    if rescaled.is_finite() {
        rescaled.trunc().clamp(0.0, 255.0) as u8
    } else {
        0
    }
}
