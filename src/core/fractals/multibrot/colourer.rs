use crate::core::actions::sweep::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::fractals::multibrot::algorithm::MultibrotAlgorithm;
use crate::core::fractals::multibrot::colour_map::MultibrotSmoothColourMap;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

/// Fuses the escape-time algorithm with the smooth palette lookup so a grid
/// sweep yields finished pixel colours directly.
#[derive(Debug)]
pub struct MultibrotColourer {
    algorithm: MultibrotAlgorithm,
    colour_map: MultibrotSmoothColourMap,
}

impl MultibrotColourer {
    #[must_use]
    pub fn new(algorithm: MultibrotAlgorithm, colour_map: MultibrotSmoothColourMap) -> Self {
        Self {
            algorithm,
            colour_map,
        }
    }
}

impl FractalAlgorithm for MultibrotColourer {
    type Success = Colour;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        Ok(self.colour_map.colour_for(self.algorithm.compute(pixel)?))
    }
}
