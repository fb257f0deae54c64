use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel evaluation kernel.
///
/// `compute` must depend on nothing but `pixel` and the state captured when
/// the algorithm was built, so pixels can be evaluated in any order and on
/// any thread.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
