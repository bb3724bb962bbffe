/// Simple moving average over a fixed window.
///
/// The output has one value per complete window, i.e.
/// `values.len() - window + 1` entries; element `i` is the mean of
/// `values[i..i + window]`. Returns an empty vector when the window is zero
/// or longer than the input.
///
/// # Examples
///
/// ```
/// use wordstat_stats::rolling::moving_average;
///
/// assert_eq!(moving_average(&[1.0, 2.0, 3.0, 4.0], 2), [1.5, 2.5, 3.5]);
/// assert!(moving_average(&[1.0, 2.0], 3).is_empty());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return vec![];
    }
    let size = window as f64;
    values
        .windows(window)
        .map(|chunk| chunk.iter().sum::<f64>() / size)
        .collect()
}
