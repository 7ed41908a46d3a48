use num_traits::{AsPrimitive, Float};

/// Returns `n` evenly spaced values from `y_start` to `y_end`,
/// inclusive.
///
/// `n` must be at least 2.
pub fn linspace<T>(y_start: T, y_end: T, n: usize) -> impl Iterator<Item = T>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
{
    let dy = (y_end - y_start) / (n - 1).as_();
    (0..n).map(move |x| y_start + x.as_() * dy)
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn test_linspace() {
        let vals: Vec<f64> = linspace(1.0, 3.0, 5).collect();
        assert_eq!(vals, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
    }

    #[test]
    fn test_linspace_descending() {
        let vals: Vec<f32> = linspace(3.0, 0.0, 4).collect();
        assert_eq!(vals, vec![3.0, 2.0, 1.0, 0.0]);
    }
}
