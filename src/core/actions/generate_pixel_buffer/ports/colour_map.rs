use crate::core::data::colour::Colour;

/// Maps one computed fractal value to a pixel colour.
///
/// Mapping is total: a colour map must produce a colour for every value its
/// algorithm can emit.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;

    fn display_name(&self) -> &str;
}
