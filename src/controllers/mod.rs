pub mod multibrot;
pub mod ports;
pub mod render_config;
