pub mod algorithm;
pub mod colour_index;
pub mod colour_map;
pub mod colour_selection;
pub mod colouring;
pub mod errors;
pub mod orbit;
pub mod palettes;
pub mod params;
pub mod seed;
