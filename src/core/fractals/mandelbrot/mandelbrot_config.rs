use std::error::Error;

use crate::core::{
    data::{complex::Complex, complex_square::ComplexSquare, sample_grid::SampleGrid},
    fractals::mandelbrot::algorithm::MandelbrotAlgorithm,
};

pub const GRID_SIZE: u32 = 800;
pub const PLANE_SIDE: f64 = 4.0;
pub const PLANE_ORIGIN: Complex = Complex { real: -2.0, imag: -2.0 };
pub const MAX_ITERATIONS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub grid_size: u32,
    pub origin: Complex,
    pub side: f64,
    pub max_iterations: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            origin: PLANE_ORIGIN,
            side: PLANE_SIDE,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl MandelbrotConfig {
    /// Validates the settings and builds the grid plus the algorithm sampling it.
    pub fn build(&self) -> Result<(SampleGrid, MandelbrotAlgorithm), Box<dyn Error>> {
        let grid = SampleGrid::new(self.grid_size)?;
        let region = ComplexSquare::new(self.origin, self.side)?;
        let algorithm = MandelbrotAlgorithm::new(grid, region, self.max_iterations)?;

        Ok((grid, algorithm))
    }
}
