use std::error::Error;
use crate::core::data::point::Point;

/// Receives the pixels that stayed bounded, in visiting order.
pub trait MarkerSink {
    type Failure: Error;

    fn mark(&mut self, pixel: Point) -> Result<(), Self::Failure>;
}
