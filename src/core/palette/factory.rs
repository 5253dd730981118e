use crate::core::palette::generators::gradient_scaled::gradient_scaled_palette;
use crate::core::palette::generators::randomised_scaled::randomised_scaled_palette;
use crate::core::palette::kinds::PaletteKinds;
use crate::core::palette::palette::{Palette, PaletteError};

/// Creates a palette of the given kind.
///
/// `seed` and `zero_blue` only affect the randomised kind; the gradient kind
/// is fully determined by `size`.
pub fn palette_factory(
    kind: PaletteKinds,
    size: usize,
    seed: u64,
    zero_blue: bool,
) -> Result<Palette, PaletteError> {
    match kind {
        PaletteKinds::RandomisedScaled => randomised_scaled_palette(size, seed, zero_blue),
        PaletteKinds::GradientScaled => gradient_scaled_palette(size),
    }
}
