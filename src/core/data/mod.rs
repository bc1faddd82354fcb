pub mod complex;
pub mod complex_square;
pub mod escape_time;
pub mod point;
pub mod sample_grid;
