pub mod factory;
pub mod generators;
pub mod kinds;
pub mod palette;
