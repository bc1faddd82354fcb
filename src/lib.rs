mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::terminal::TerminalController;
pub use crate::controllers::ports::terminal_presenter::TerminalPresenterPort;
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_markers::ports::marker_sink::MarkerSink;
pub use crate::core::actions::render_markers::render_markers::{render_markers, RenderMarkersError, RenderStats};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_square::ComplexSquare;
pub use crate::core::data::escape_time::EscapeTime;
pub use crate::core::data::point::Point;
pub use crate::core::data::sample_grid::SampleGrid;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::presenters::terminal::ansi::AnsiTerminalPresenter;
