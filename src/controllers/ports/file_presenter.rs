use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Destination for a finished render, decoupling image generation from how
/// and where the bytes are written.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
