//! Evenly spaced axis construction for grid evaluation.

use num_traits::Float;

/// Returns `count` evenly spaced values from `start` to `stop` inclusive.
///
/// With `count == 1` the result is just `[start]`; with `count == 0` the
/// result is empty. The last point is set to `stop` exactly rather than
/// accumulated, so the endpoints carry no round-off.
///
/// # Examples
/// ```
/// use volgrid_core::math::axis::linspace;
///
/// let axis = linspace(0.0_f64, 1.0, 5);
/// assert_eq!(axis, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace<T: Float>(start: T, stop: T, count: usize) -> Vec<T> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / T::from(count - 1).unwrap();
            let mut values: Vec<T> = (0..count - 1)
                .map(|i| start + step * T::from(i).unwrap())
                .collect();
            values.push(stop);
            values
        }
    }
}
