pub mod algorithm;
pub mod colour_map;
pub mod colourer;
pub mod errors;
pub mod params;
pub mod smoothing;
