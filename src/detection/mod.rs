//! Detection utilities for numeric sequences.

mod outlier;

pub use outlier::{
    detect_outliers, detect_outliers_default, OutlierPoint, DEFAULT_Z_THRESHOLD,
};
