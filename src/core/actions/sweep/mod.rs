//! Sweeps every pixel of a grid through a fractal algorithm, either serially,
//! in parallel with rayon, or streamed pixel by pixel into a sink.

pub mod errors;
pub mod ports;
pub mod sweep_grid;
pub mod sweep_grid_rayon;
pub mod sweep_grid_to_sink;
