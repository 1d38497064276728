//! Gaussian smoothing along the frequency axis.

/// Smooths `values` with a normalized Gaussian kernel.
///
/// The kernel is truncated at `round(4 * sigma)` bins on each side and the
/// signal is extended by mirror reflection at both ends (`c b a | a b c | c b
/// a`), so a constant input stays constant. A `sigma` of zero returns the
/// input unchanged.
pub fn gaussian_smooth(values: &[f64], sigma: f64) -> Vec<f64> {
    if values.is_empty() || sigma.is_nan() || sigma <= 0.0 {
        return values.to_vec();
    }

    let radius = (4.0 * sigma + 0.5) as usize;
    let kernel = gaussian_kernel(sigma, radius);
    let n = values.len() as isize;

    (0..n)
        .map(|i| {
            kernel
                .iter()
                .enumerate()
                .map(|(j, w)| {
                    let offset = j as isize - radius as isize;
                    w * values[reflect(i + offset, n)]
                })
                .sum()
        })
        .collect()
}

fn gaussian_kernel(sigma: f64, radius: usize) -> Vec<f64> {
    let r = radius as isize;
    let weights: Vec<f64> = (-r..=r)
        .map(|x| (-0.5 * (x as f64 / sigma).powi(2)).exp())
        .collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}

/// Maps an out-of-range index into `0..n` by half-sample reflection.
fn reflect(index: isize, n: isize) -> usize {
    let m = index.rem_euclid(2 * n);
    if m < n {
        m as usize
    } else {
        (2 * n - 1 - m) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_is_preserved() {
        let out = gaussian_smooth(&[0.7; 20], 1.5);
        assert!(out.iter().all(|v| (v - 0.7).abs() < 1e-12));
    }

    #[test]
    fn test_zero_sigma_is_identity() {
        let values = vec![1.0, 0.0, 3.0];
        assert_eq!(gaussian_smooth(&values, 0.0), values);
    }

    #[test]
    fn test_spike_is_spread_and_sum_preserved() {
        let mut values = vec![0.0; 41];
        values[20] = 1.0;
        let out = gaussian_smooth(&values, 1.5);

        assert!(out[20] < 1.0);
        assert!(out[19] > 0.0 && (out[19] - out[21]).abs() < 1e-15);
        assert!((out.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reflect_indices() {
        assert_eq!(reflect(-1, 5), 0);
        assert_eq!(reflect(-2, 5), 1);
        assert_eq!(reflect(5, 5), 4);
        assert_eq!(reflect(6, 5), 3);
        assert_eq!(reflect(3, 5), 3);
        // kernel wider than the input
        assert_eq!(reflect(-7, 3), 0);
    }

    #[test]
    fn test_short_input_with_wide_kernel() {
        let out = gaussian_smooth(&[1.0, 2.0], 3.0);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|v| v.is_finite() && *v > 1.0 && *v < 2.0));
    }
}
