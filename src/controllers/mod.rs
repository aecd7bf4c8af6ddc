pub mod ports;
pub mod render_region;
pub mod tile_service;
