use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::render_config::RenderConfig;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::sweep::sweep_grid_rayon::sweep_grid_rayon;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::multibrot::algorithm::MultibrotAlgorithm;
use crate::core::fractals::multibrot::colour_map::MultibrotSmoothColourMap;
use crate::core::fractals::multibrot::params::MultibrotParams;
use crate::core::palette::factory::palette_factory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultibrotControllerError {
    NothingGenerated,
}

impl fmt::Display for MultibrotControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingGenerated => write!(f, "no image has been generated yet"),
        }
    }
}

impl Error for MultibrotControllerError {}

/// Renders a Multibrot image from a [`RenderConfig`] and hands the finished
/// pixel buffer to a file presenter.
///
/// Rendering and writing are separate steps so a generated image can be
/// inspected or written to several destinations.
pub struct MultibrotController<P: FilePresenterPort> {
    config: RenderConfig,
    presenter: P,
    pixel_buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> MultibrotController<P> {
    pub fn new(config: RenderConfig, presenter: P) -> Self {
        Self {
            config,
            presenter,
            pixel_buffer: None,
        }
    }

    /// Validates the configuration, sweeps the grid in parallel and colours
    /// the results into a pixel buffer held on the controller.
    pub fn generate(&mut self) -> Result<(), Box<dyn Error>> {
        let pixel_rect = PixelRect::from_size(self.config.width, self.config.height)?;
        let params = MultibrotParams::new(self.config.exponent, self.config.max_iterations)?;
        let palette = palette_factory(
            self.config.palette_kind,
            self.config.palette_size,
            self.config.palette_seed,
            self.config.zero_blue,
        )?;
        let colour_map = MultibrotSmoothColourMap::new(palette);

        println!("Rendering Multibrot set...");
        println!("Image size: {}x{}", self.config.width, self.config.height);
        println!("Exponent: {}", self.config.exponent);
        println!("Max iterations: {}", self.config.max_iterations);

        let algorithm = MultibrotAlgorithm::new(pixel_rect, self.config.region, params);

        let start = Instant::now();
        let results = sweep_grid_rayon(pixel_rect, &algorithm)?;
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);

        if self.config.trace_pixels {
            let width = pixel_rect.width() as usize;

            for (index, result) in results.iter().enumerate() {
                println!("Pixel: ({}, {})", index % width, index / width);
                println!("\tIterations: {}", result.iterations);
            }
        }

        let pixel_buffer = generate_pixel_buffer(results, &colour_map, pixel_rect)?;
        self.pixel_buffer = Some(pixel_buffer);

        Ok(())
    }

    /// Writes the most recently generated image through the presenter.
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
        match &self.pixel_buffer {
            Some(buffer) => {
                self.presenter.present(buffer, &filepath)?;
                println!("Saved to {}", filepath.as_ref().display());
                Ok(())
            }
            None => Err(Box::new(MultibrotControllerError::NothingGenerated)),
        }
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> Option<&PixelBuffer> {
        self.pixel_buffer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockFilePresenter {
        presented: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl MockFilePresenter {
        fn presented_paths(&self) -> Vec<PathBuf> {
            self.presented.lock().unwrap().clone()
        }
    }

    impl FilePresenterPort for MockFilePresenter {
        fn present(&self, _buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented
                .lock()
                .unwrap()
                .push(filepath.as_ref().to_path_buf());

            Ok(())
        }
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 8,
            height: 6,
            max_iterations: 20,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_generate_fills_the_pixel_buffer() {
        let mut controller = MultibrotController::new(small_config(), MockFilePresenter::default());

        controller.generate().unwrap();

        let buffer = controller.pixel_buffer().unwrap();
        assert_eq!(buffer.buffer().len(), 8 * 6 * 3);
    }

    #[test]
    fn test_generate_rejects_a_degenerate_image() {
        let config = RenderConfig {
            width: 1,
            ..small_config()
        };
        let mut controller = MultibrotController::new(config, MockFilePresenter::default());

        assert!(controller.generate().is_err());
        assert!(controller.pixel_buffer().is_none());
    }

    #[test]
    fn test_generate_rejects_zero_iterations() {
        let config = RenderConfig {
            max_iterations: 0,
            ..small_config()
        };
        let mut controller = MultibrotController::new(config, MockFilePresenter::default());

        assert!(controller.generate().is_err());
    }

    #[test]
    fn test_generate_rejects_a_non_finite_exponent() {
        let config = RenderConfig {
            exponent: f64::NAN,
            ..small_config()
        };
        let mut controller = MultibrotController::new(config, MockFilePresenter::default());

        assert!(controller.generate().is_err());
    }

    #[test]
    fn test_generate_rejects_a_too_small_palette() {
        let config = RenderConfig {
            palette_size: 1,
            ..small_config()
        };
        let mut controller = MultibrotController::new(config, MockFilePresenter::default());

        assert!(controller.generate().is_err());
    }

    #[test]
    fn test_write_before_generate_is_an_error() {
        let presenter = MockFilePresenter::default();
        let controller = MultibrotController::new(small_config(), presenter.clone());

        assert!(controller.write("multibrot.ppm").is_err());
        assert!(presenter.presented_paths().is_empty());
    }

    #[test]
    fn test_write_presents_the_generated_buffer() {
        let presenter = MockFilePresenter::default();
        let mut controller = MultibrotController::new(small_config(), presenter.clone());

        controller.generate().unwrap();
        controller.write("output/multibrot.ppm").unwrap();

        assert_eq!(
            presenter.presented_paths(),
            vec![PathBuf::from("output/multibrot.ppm")]
        );
    }

    #[test]
    fn test_identical_configs_generate_identical_buffers() {
        let mut first = MultibrotController::new(small_config(), MockFilePresenter::default());
        let mut second = MultibrotController::new(small_config(), MockFilePresenter::default());

        first.generate().unwrap();
        second.generate().unwrap();

        assert_eq!(
            first.pixel_buffer().unwrap().buffer(),
            second.pixel_buffer().unwrap().buffer()
        );
    }

    #[test]
    fn test_cubic_exponent_renders_a_different_image() {
        let gradient_config = RenderConfig {
            palette_kind: crate::core::palette::kinds::PaletteKinds::GradientScaled,
            ..small_config()
        };
        let mut quadratic =
            MultibrotController::new(gradient_config, MockFilePresenter::default());
        let cubic_config = RenderConfig {
            exponent: 3.0,
            ..gradient_config
        };
        let mut cubic = MultibrotController::new(cubic_config, MockFilePresenter::default());

        quadratic.generate().unwrap();
        cubic.generate().unwrap();

        assert_ne!(
            quadratic.pixel_buffer().unwrap().buffer(),
            cubic.pixel_buffer().unwrap().buffer()
        );
    }
}
