use crate::controllers::ports::terminal_presenter::TerminalPresenterPort;
use crate::core::actions::render_markers::ports::marker_sink::MarkerSink;
use crate::core::data::point::Point;
use std::io::{self, BufWriter, Stdout, Write};

pub const FULL_BLOCK: char = '\u{2588}';

/// Draws each marker as a cursor move (`ESC [ row ; col H`) followed by a full block.
///
/// Row and column are the pixel's x and y written verbatim, without shifting to
/// the terminal's 1-based numbering. Nothing else is ever written: no clear, no
/// trailing newline, no reset.
pub struct AnsiTerminalPresenter<W: Write> {
    writer: W,
}

impl<W: Write> MarkerSink for AnsiTerminalPresenter<W> {
    type Failure = io::Error;

    fn mark(&mut self, pixel: Point) -> io::Result<()> {
        write!(self.writer, "\x1b[{};{}H{}", pixel.x, pixel.y, FULL_BLOCK)
    }
}

impl<W: Write> TerminalPresenterPort for AnsiTerminalPresenter<W> {
    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Default for AnsiTerminalPresenter<BufWriter<Stdout>> {
    fn default() -> Self {
        Self::new(BufWriter::new(io::stdout()))
    }
}

impl<W: Write> AnsiTerminalPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
