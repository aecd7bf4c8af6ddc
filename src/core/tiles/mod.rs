pub mod tile_address;
pub mod tile_bounds;
pub mod tile_cache;
pub mod tile_params;
