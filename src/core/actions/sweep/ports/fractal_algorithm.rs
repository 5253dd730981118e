use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel computation plugged into the sweep actions.
///
/// Implementations must be pure: the result for a pixel may not depend on
/// any other pixel, which is what lets the parallel sweep reorder work
/// freely while producing identical output.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
