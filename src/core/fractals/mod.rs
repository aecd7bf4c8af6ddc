pub mod mandelbrot;
pub mod registry;
