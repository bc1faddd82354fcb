use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::sample_grid::SampleGrid;

/// Computes every pixel of the grid in visiting order, stopping at the first failure.
pub fn generate_fractal<Alg: FractalAlgorithm>(grid: SampleGrid, algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
{
    grid.points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
