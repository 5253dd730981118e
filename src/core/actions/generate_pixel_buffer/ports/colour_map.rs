use crate::core::data::colour::Colour;
use std::error::Error;

/// Maps per-pixel computation results to display colours.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, Box<dyn Error>>;

    fn display_name(&self) -> &str;
}
