use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::sweep::errors::SweepError;
use crate::core::actions::sweep::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::sweep::ports::pixel_sink::PixelSink;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Sweeps the rect sequentially, pushing each pixel's colour into a sink.
///
/// This is the incremental counterpart of the batch sweeps: instead of
/// collecting results, the sink is notified once per pixel in row-major
/// order. For cancel-aware sweeps, use [`sweep_grid_to_sink_cancelable`].
pub fn sweep_grid_to_sink<Alg, S>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    sink: &mut S,
) -> Result<(), Alg::Failure>
where
    Alg: FractalAlgorithm<Success = Colour>,
    S: PixelSink,
{
    sweep_grid_to_sink_cancelable_impl(pixel_rect, algorithm, sink, &NeverCancel).map_err(|e| {
        match e {
            SweepError::Algorithm(alg_err) => alg_err,
            SweepError::Cancelled(_) => {
                unreachable!("NeverCancel token should never signal cancellation")
            }
        }
    })
}

/// Sweeps the rect into a sink with cancellation support.
///
/// Returns [`SweepError::Cancelled`] if cancellation was requested; pixels
/// already pushed into the sink stay pushed, the sweep simply stops early.
pub fn sweep_grid_to_sink_cancelable<Alg, S, C>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    sink: &mut S,
    cancel: &C,
) -> Result<(), SweepError<Alg::Failure>>
where
    Alg: FractalAlgorithm<Success = Colour>,
    S: PixelSink,
    C: CancelToken,
{
    sweep_grid_to_sink_cancelable_impl(pixel_rect, algorithm, sink, cancel)
}

pub(crate) fn sweep_grid_to_sink_cancelable_impl<Alg, S, C>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    sink: &mut S,
    cancel: &C,
) -> Result<(), SweepError<Alg::Failure>>
where
    Alg: FractalAlgorithm<Success = Colour>,
    S: PixelSink,
    C: CancelToken,
{
    let mut pixels_done: usize = 0;

    for y in pixel_rect.top_left().y..=pixel_rect.bottom_right().y {
        for x in pixel_rect.top_left().x..=pixel_rect.bottom_right().x {
            if pixels_done % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(SweepError::Cancelled(Cancelled));
            }

            let pixel = Point { x, y };
            let colour = algorithm.compute(pixel).map_err(SweepError::Algorithm)?;
            sink.accept(pixel, colour);
            pixels_done += 1;
        }
    }

    Ok(())
}
