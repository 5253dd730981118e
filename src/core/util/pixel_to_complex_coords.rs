use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::util::affine_scale::affine_scale;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel position onto the complex plane.
///
/// Each axis is rescaled independently: the pixel rect's left and right
/// columns land exactly on the complex rect's real bounds, and the top and
/// bottom rows land exactly on the imaginary bounds. [`PixelRect`] guarantees
/// at least two pixels per axis, so the source ranges are never degenerate.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let real = affine_scale(
        f64::from(pixel_position.x),
        f64::from(pixel_rect.top_left().x),
        f64::from(pixel_rect.bottom_right().x),
        complex_rect.top_left().real,
        complex_rect.bottom_right().real,
    );
    let imag = affine_scale(
        f64::from(pixel_position.y),
        f64::from(pixel_rect.top_left().y),
        f64::from(pixel_rect.bottom_right().y),
        complex_rect.top_left().imag,
        complex_rect.bottom_right().imag,
    );

    Ok(Complex { real, imag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_view() -> ComplexRect {
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
        .unwrap()
    }

    #[test]
    fn test_pixel_to_complex_top_left_is_exact() {
        let pixel_rect = PixelRect::from_size(500, 500).unwrap();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, pixel_rect, default_view());

        assert_eq!(result.unwrap().real, -2.5);
        assert_eq!(result.unwrap().imag, -1.0);
    }

    #[test]
    fn test_pixel_to_complex_bottom_right_is_exact() {
        let pixel_rect = PixelRect::from_size(500, 500).unwrap();

        let result =
            pixel_to_complex_coords(Point { x: 499, y: 499 }, pixel_rect, default_view());

        assert_eq!(result.unwrap().real, 1.0);
        assert_eq!(result.unwrap().imag, 1.0);
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let pixel_rect = PixelRect::from_size(101, 101).unwrap();

        let complex_rect = ComplexRect::new(
            Complex {
                real: -1.0,
                imag: -1.0,
            },
            Complex {
                real: 1.0,
                imag: 1.0,
            },
        )
        .unwrap();

        let result = pixel_to_complex_coords(Point { x: 50, y: 50 }, pixel_rect, complex_rect);

        assert_eq!(result.unwrap().real, 0.0);
        assert_eq!(result.unwrap().imag, 0.0);
    }

    #[test]
    fn test_offset_pixel_rect_maps_corners_exactly() {
        let pixel_rect = PixelRect::new(Point { x: 100, y: 200 }, Point { x: 199, y: 299 }).unwrap();

        let top_left =
            pixel_to_complex_coords(Point { x: 100, y: 200 }, pixel_rect, default_view()).unwrap();
        let bottom_right =
            pixel_to_complex_coords(Point { x: 199, y: 299 }, pixel_rect, default_view()).unwrap();

        assert_eq!(top_left.real, -2.5);
        assert_eq!(top_left.imag, -1.0);
        assert_eq!(bottom_right.real, 1.0);
        assert_eq!(bottom_right.imag, 1.0);
    }

    #[test]
    fn test_pixel_outside_rect_fails() {
        let point1 = Point { x: 150, y: 150 };
        let point2 = Point { x: -10, y: -10 };

        let pixel_rect = PixelRect::from_size(101, 101).unwrap();

        let result1 = pixel_to_complex_coords(point1, pixel_rect, default_view());
        let result2 = pixel_to_complex_coords(point2, pixel_rect, default_view());

        assert_eq!(
            result1,
            Err(PixelToComplexCoordsError::PointOutsideRect {
                point: point1,
                pixel_rect
            })
        );
        assert_eq!(
            result2,
            Err(PixelToComplexCoordsError::PointOutsideRect {
                point: point2,
                pixel_rect
            })
        );
    }
}
