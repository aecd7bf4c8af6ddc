pub mod render_region;
pub mod render_request;
