use std::error::Error;

use crate::core::data::point::Point;

/// Per-pixel computation driven by the field generators.
///
/// Implementations must be pure in `pixel`: the generators may call `compute`
/// from several threads and in any order.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
