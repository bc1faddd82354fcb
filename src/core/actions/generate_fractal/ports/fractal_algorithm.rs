use std::error::Error;
use crate::core::data::point::Point;

/// Per-pixel computation shared by the collecting and streaming actions.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    /// Result for a single grid pixel; pixels outside the algorithm's grid fail.
    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
