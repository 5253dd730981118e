pub mod gradient_scaled;
pub mod randomised_scaled;
