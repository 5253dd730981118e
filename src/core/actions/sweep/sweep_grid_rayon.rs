use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::sweep::errors::SweepError;
use crate::core::actions::sweep::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Sweeps the rect in parallel using rayon's work-stealing scheduler.
///
/// Rows are distributed across the thread pool and the per-row results are
/// reassembled in row-major order, so the output is identical to
/// [`sweep_grid`](crate::core::actions::sweep::sweep_grid::sweep_grid)
/// regardless of thread count. For cancel-aware sweeps, use
/// [`sweep_grid_rayon_cancelable`].
pub fn sweep_grid_rayon<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    sweep_grid_rayon_cancelable_impl(pixel_rect, algorithm, &NeverCancel).map_err(|e| match e {
        SweepError::Algorithm(alg_err) => alg_err,
        SweepError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Sweeps the rect in parallel with cancellation support.
///
/// Like [`sweep_grid_rayon`], but accepts a cancellation token that can abort
/// the computation early. Checks for cancellation at the start of each row
/// and periodically within rows.
///
/// Returns [`SweepError::Cancelled`] if cancellation was requested, which
/// should be handled as expected control flow (not an error to display).
pub fn sweep_grid_rayon_cancelable<Alg, C>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, SweepError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    sweep_grid_rayon_cancelable_impl(pixel_rect, algorithm, cancel)
}

/// Internal cancel-aware parallel sweep implementation.
///
/// Processes rows in parallel, checking for cancellation at the start of each
/// row and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
pub(crate) fn sweep_grid_rayon_cancelable_impl<Alg, C>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, SweepError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let y_range: Vec<i32> = (pixel_rect.top_left().y..=pixel_rect.bottom_right().y).collect();
    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;
    let row_width = pixel_rect.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, SweepError<Alg::Failure>> = y_range
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for (i, x) in (x_start..=x_end).enumerate() {
                // Polled at row start (i == 0) and every N pixels after
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(SweepError::Cancelled(Cancelled));
                }

                let result = algorithm
                    .compute(Point { x, y })
                    .map_err(SweepError::Algorithm)?;
                row.push(result);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
