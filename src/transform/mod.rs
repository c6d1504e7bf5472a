//! Transformations over numeric sequences.

mod window;

pub use window::moving_average;
