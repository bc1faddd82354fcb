use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_square::ComplexSquare;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::point::Point;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{pixel_to_complex_coords, PixelToComplexCoordsError};

/// Squared bailout radius: a point has escaped once |z|² exceeds this.
pub const BAILOUT_MAGNITUDE_SQUARED: f64 = 4.0;

#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    grid: SampleGrid,
    region: ComplexSquare,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeTime;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.grid, self.region)?;

        Ok(self.escape_time(c))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(grid: SampleGrid, region: ComplexSquare, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self { grid, region, max_iterations })
    }

    #[must_use]
    pub fn grid(&self) -> SampleGrid {
        self.grid
    }

    #[must_use]
    pub fn region(&self) -> ComplexSquare {
        self.region
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Iterates z <- z² + c from zero while |z|² stays within the bailout and
    /// the cap has not been hit. The iterate produced by the final step is
    /// never tested, so reaching the cap always counts as bounded.
    #[must_use]
    pub fn escape_time(&self, c: Complex) -> EscapeTime {
        let mut z = Complex::ZERO;
        let mut iterations = 0;

        while z.magnitude_squared() <= BAILOUT_MAGNITUDE_SQUARED && iterations < self.max_iterations {
            z = z * z + c;
            iterations += 1;
        }

        EscapeTime {
            iterations,
            max_iterations: self.max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algorithm_with_cap(max_iterations: u32) -> MandelbrotAlgorithm {
        let grid = SampleGrid::new(800).unwrap();
        let region = ComplexSquare::new(Complex { real: -2.0, imag: -2.0 }, 4.0).unwrap();

        MandelbrotAlgorithm::new(grid, region, max_iterations).unwrap()
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        let grid = SampleGrid::new(800).unwrap();
        let region = ComplexSquare::new(Complex { real: -2.0, imag: -2.0 }, 4.0).unwrap();

        let result = MandelbrotAlgorithm::new(grid, region, 0);

        assert_eq!(result.unwrap_err(), MandelbrotError::ZeroMaxIterations);
    }

    #[test]
    fn test_centre_pixel_never_escapes() {
        let algorithm = algorithm_with_cap(50);

        let result = algorithm.compute(Point { x: 400, y: 400 }).unwrap();

        assert_eq!(result, EscapeTime { iterations: 50, max_iterations: 50 });
        assert!(result.is_bounded());
    }

    #[test]
    fn test_corner_pixel_escapes_after_first_step() {
        let algorithm = algorithm_with_cap(50);

        let result = algorithm.compute(Point { x: 0, y: 0 }).unwrap();

        assert_eq!(result.iterations, 1);
        assert!(!result.is_bounded());
    }

    #[test]
    fn test_minus_one_is_periodic_and_bounded() {
        let algorithm = algorithm_with_cap(50);

        // c = -1 cycles 0, -1, 0, -1, ...
        let result = algorithm.compute(Point { x: 200, y: 400 }).unwrap();

        assert!(result.is_bounded());
    }

    #[test]
    fn test_final_iterate_is_not_tested_against_bailout() {
        // with a cap of one, z0 = 0 always passes the guard and the cap is hit
        // before z1 = c is ever checked, even at |c|² = 8
        let algorithm = algorithm_with_cap(1);

        let corner = algorithm.compute(Point { x: 0, y: 0 }).unwrap();

        assert!(corner.is_bounded());
    }

    #[test]
    fn test_escape_before_cap_is_not_bounded() {
        let algorithm = algorithm_with_cap(2);

        let corner = algorithm.compute(Point { x: 0, y: 0 }).unwrap();

        assert_eq!(corner, EscapeTime { iterations: 1, max_iterations: 2 });
        assert!(!corner.is_bounded());
    }

    #[test]
    fn test_iterations_never_exceed_cap() {
        let algorithm = algorithm_with_cap(50);
        let grid = algorithm.grid();

        for point in grid.points().step_by(97) {
            let result = algorithm.compute(point).unwrap();

            assert!(result.iterations <= 50);
        }
    }

    #[test]
    fn test_matches_reference_loop() {
        let algorithm = algorithm_with_cap(50);

        for point in algorithm.grid().points().step_by(311) {
            let c_real = (point.x as f64 * 4.0 / 800.0) - 2.0;
            let c_imag = (point.y as f64 * 4.0 / 800.0) - 2.0;
            let (mut z_real, mut z_imag, mut count) = (0.0_f64, 0.0_f64, 0.0_f64);
            let mut marked = false;

            while (z_real * z_real + z_imag * z_imag) <= 4.0 && count < 50.0 {
                let temp = (z_real * z_real) - (z_imag * z_imag) + c_real;
                z_imag = 2.0 * z_real * z_imag + c_imag;
                z_real = temp;
                count += 1.0;
                if count == 50.0 {
                    marked = true;
                }
            }

            let result = algorithm.compute(point).unwrap();

            assert_eq!(result.iterations as f64, count);
            assert_eq!(result.is_bounded(), marked);
        }
    }

    #[test]
    fn test_pixel_outside_grid_is_an_error() {
        let algorithm = algorithm_with_cap(50);

        assert!(algorithm.compute(Point { x: 800, y: 0 }).is_err());
    }
}
