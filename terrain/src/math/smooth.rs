use num_traits::Float;

/// Halves the resolution of `samples` by averaging adjacent pairs.
///
/// A trailing unpaired sample is dropped.
pub fn smooth<T: Float>(samples: &[T]) -> Vec<T> {
    let two = T::one() + T::one();
    samples
        .chunks_exact(2)
        .map(|pair| (pair[0] + pair[1]) / two)
        .collect()
}

/// Applies [`smooth`] `n` times.
pub fn smooth_n<T: Float>(n: usize, samples: &[T]) -> Vec<T> {
    (0..n).fold(samples.to_vec(), |acc, _| smooth(&acc))
}
