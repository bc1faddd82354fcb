use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_markers::ports::marker_sink::MarkerSink;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::sample_grid::SampleGrid;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RenderMarkersError<A, S> {
    Algorithm(A),
    Sink(S),
}

impl<A: Error, S: Error> fmt::Display for RenderMarkersError<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "fractal algorithm error: {}", err),
            Self::Sink(err) => write!(f, "marker sink error: {}", err),
        }
    }
}

impl<A: Error + 'static, S: Error + 'static> Error for RenderMarkersError<A, S> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::Sink(err) => Some(err),
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RenderStats {
    pub pixels_visited: u64,
    pub markers: u64,
}

/// Walks the grid in visiting order and hands every bounded pixel to the sink
/// as soon as it is computed.
///
/// Nothing is buffered here: the n-th `mark` call is the n-th bounded pixel.
/// The first failure from either side stops the walk.
pub fn render_markers<Alg, Sink>(
    grid: SampleGrid,
    algorithm: &Alg,
    sink: &mut Sink,
) -> Result<RenderStats, RenderMarkersError<Alg::Failure, Sink::Failure>>
where
    Alg: FractalAlgorithm<Success = EscapeTime>,
    Sink: MarkerSink,
{
    let mut stats = RenderStats::default();

    for pixel in grid.points() {
        let escape_time = algorithm.compute(pixel).map_err(RenderMarkersError::Algorithm)?;
        stats.pixels_visited += 1;

        if escape_time.is_bounded() {
            sink.mark(pixel).map_err(RenderMarkersError::Sink)?;
            stats.markers += 1;
        }
    }

    Ok(stats)
}
