pub mod colour;
pub mod complex_rect;
pub mod named_region;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
