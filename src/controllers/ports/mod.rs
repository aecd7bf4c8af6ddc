pub mod tile_encoder;
