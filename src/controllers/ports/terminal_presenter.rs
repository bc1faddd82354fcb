use crate::core::actions::render_markers::ports::marker_sink::MarkerSink;

pub trait TerminalPresenterPort: MarkerSink<Failure = std::io::Error> {
    fn flush(&mut self) -> std::io::Result<()>;
}
