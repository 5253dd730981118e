pub mod affine_scale;
pub mod pixel_to_complex_coords;
