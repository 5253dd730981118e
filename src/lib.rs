pub mod controllers;
pub mod core;
pub mod presenters;

pub use controllers::multibrot::MultibrotController;
pub use controllers::render_config::RenderConfig;
pub use presenters::file::ppm::PpmFilePresenter;
