use crate::core::actions::sweep::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Runs the algorithm over every pixel in the rect, sequentially.
///
/// Results are collected in row-major order, one entry per pixel. This is
/// the reference sweep; the parallel variant must produce identical output.
pub fn sweep_grid<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
        .flat_map(|y| {
            (pixel_rect.top_left().x..=pixel_rect.bottom_right().x).map(move |x| Point { x, y })
        })
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
