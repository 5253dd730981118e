use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::multibrot::params::{DEFAULT_EXPONENT, DEFAULT_MAX_ITERATIONS};
use crate::core::palette::kinds::PaletteKinds;

const DEFAULT_IMAGE_WIDTH: i32 = 500;
const DEFAULT_IMAGE_HEIGHT: i32 = 500;
const DEFAULT_PALETTE_SIZE: usize = 10;
const DEFAULT_PALETTE_SEED: u64 = 0;

pub(crate) fn default_region() -> ComplexRect {
    ComplexRect::new(
        Complex {
            real: -2.5,
            imag: -1.0,
        },
        Complex {
            real: 1.0,
            imag: 1.0,
        },
    )
    .expect("default fractal region is valid")
}

/// Settings for a single file render.
///
/// Values are plain fields so callers can tweak what they need; validation
/// happens when the controller turns them into the domain types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: i32,
    pub height: i32,
    pub exponent: f64,
    pub region: ComplexRect,
    pub max_iterations: u32,
    pub palette_kind: PaletteKinds,
    pub palette_size: usize,
    pub palette_seed: u64,
    pub zero_blue: bool,
    pub trace_pixels: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
            exponent: DEFAULT_EXPONENT,
            region: default_region(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            palette_kind: PaletteKinds::default(),
            palette_size: DEFAULT_PALETTE_SIZE,
            palette_seed: DEFAULT_PALETTE_SEED,
            zero_blue: true,
            trace_pixels: false,
        }
    }
}
