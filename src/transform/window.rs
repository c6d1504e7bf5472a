//! Windowed transformations over numeric sequences.

/// Sliding-window arithmetic mean over trailing windows.
///
/// The output has length `values.len() - window + 1`: one mean per
/// fully-populated window. Returns an empty vector when `window` is
/// zero or exceeds the input length.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || window > values.len() {
        return Vec::new();
    }

    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}
