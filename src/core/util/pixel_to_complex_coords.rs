use crate::core::data::complex::Complex;
use crate::core::data::complex_square::ComplexSquare;
use crate::core::data::point::Point;
use crate::core::data::sample_grid::SampleGrid;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideGrid { point: Point, grid: SampleGrid },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid { point, grid } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} sample grid",
                    point.x,
                    point.y,
                    grid.size(),
                    grid.size()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a grid index onto the complex square as `index * side / size + origin`.
///
/// The left edge of the grid lands on the square's origin; the far edge is one
/// step short of `origin + side`.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    grid: SampleGrid,
    square: ComplexSquare,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !grid.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideGrid {
            point: pixel_position,
            grid,
        });
    }

    let size = f64::from(grid.size());
    let real = (f64::from(pixel_position.x) * square.side() / size) + square.origin().real;
    let imag = (f64::from(pixel_position.y) * square.side() / size) + square.origin().imag;

    Ok(Complex { real, imag })
}
