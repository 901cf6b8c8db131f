use ndarray::Array2;

/// Mark every pixel whose reading dropped at least `threshold` below the
/// baseline. One-sided on purpose: readings above baseline never count.
pub fn contact_mask(baseline: &Array2<f32>, current: &Array2<f32>, threshold: f32) -> Array2<bool> {
    Array2::from_shape_fn(baseline.raw_dim(), |(r, c)| {
        baseline[[r, c]] - current[[r, c]] >= threshold
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive_and_one_sided() {
        let baseline = Array2::from_elem((1, 3), 100.);
        let current = ndarray::arr2(&[[60., 60.1, 150.]]);
        let mask = contact_mask(&baseline, &current, 40.);
        assert!(mask[[0, 0]]); // exactly at threshold
        assert!(!mask[[0, 1]]); // just under
        assert!(!mask[[0, 2]]); // above baseline
    }
}
