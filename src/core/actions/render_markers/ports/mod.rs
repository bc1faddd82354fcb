pub mod marker_sink;
