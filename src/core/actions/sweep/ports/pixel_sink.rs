use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Receiver for incrementally rendered pixels.
///
/// The sink is notified once per pixel, in row-major order, as the sweep
/// produces colours. Calls are synchronous; a sink that needs to hand work
/// to another thread should do its own buffering.
pub trait PixelSink {
    fn accept(&mut self, pixel: Point, colour: Colour);
}

impl<F> PixelSink for F
where
    F: FnMut(Point, Colour),
{
    #[inline]
    fn accept(&mut self, pixel: Point, colour: Colour) {
        self(pixel, colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_sink_records_pixels() {
        let mut received: Vec<(Point, Colour)> = Vec::new();
        let mut sink = |pixel: Point, colour: Colour| received.push((pixel, colour));

        sink.accept(Point { x: 3, y: 7 }, Colour { r: 10, g: 20, b: 30 });

        assert_eq!(
            received,
            vec![(Point { x: 3, y: 7 }, Colour { r: 10, g: 20, b: 30 })]
        );
    }
}
