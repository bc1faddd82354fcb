use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SampleGridError {
    EmptyGrid,
}

impl fmt::Display for SampleGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => {
                write!(f, "sample grid must have at least one pixel per axis")
            }
        }
    }
}

impl Error for SampleGridError {}

/// Square grid of `size` x `size` pixels, indexed from zero on both axes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SampleGrid {
    size: u32,
}

impl SampleGrid {
    pub fn new(size: u32) -> Result<Self, SampleGridError> {
        if size == 0 {
            return Err(SampleGridError::EmptyGrid);
        }

        Ok(Self { size })
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.size) * u64::from(self.size)
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.size && point.y < self.size
    }

    /// Every pixel with `x` as the outer loop and `y` as the inner loop, both ascending.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;

        (0..size).flat_map(move |x| (0..size).map(move |y| Point { x, y }))
    }
}
