use std::time::Instant;

use log::{debug, info};

use crate::{
    controllers::ports::terminal_presenter::TerminalPresenterPort,
    core::{
        actions::render_markers::render_markers::{render_markers, RenderStats},
        fractals::mandelbrot::mandelbrot_config::MandelbrotConfig,
    },
};

pub struct TerminalController<P: TerminalPresenterPort> {
    presenter: P,
    config: MandelbrotConfig,
}

impl<P: TerminalPresenterPort> TerminalController<P> {
    pub fn new(presenter: P) -> Self {
        Self::with_config(presenter, MandelbrotConfig::default())
    }

    pub fn with_config(presenter: P, config: MandelbrotConfig) -> Self {
        Self { presenter, config }
    }

    /// Runs one full pass over the grid, streaming markers to the presenter,
    /// and flushes it once at the end.
    pub fn render(&mut self) -> Result<RenderStats, Box<dyn std::error::Error>> {
        let (grid, algorithm) = self.config.build()?;

        info!("Rendering Mandelbrot set...");
        info!("Grid size: {}x{}", grid.size(), grid.size());
        info!("Max iterations: {}", algorithm.max_iterations());
        debug!("Sampled region: {:?}", algorithm.region());

        let start = Instant::now();
        let stats = render_markers(grid, &algorithm, &mut self.presenter)?;
        self.presenter.flush()?;
        let duration = start.elapsed();

        info!("Duration:   {:?}", duration);
        info!("Markers:    {} of {} pixels", stats.markers, stats.pixels_visited);

        Ok(stats)
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
