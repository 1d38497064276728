//! Smooth peak limiting.

/// Applies `ceiling * tanh(x / ceiling)` to every sample in place.
///
/// Monotone and odd. Near-linear for small inputs, and the output magnitude
/// always stays strictly below `ceiling`.
pub fn soft_limit(samples: &mut [f64], ceiling: f64) {
    for s in samples.iter_mut() {
        *s = ceiling * (*s / ceiling).tanh();
    }
}
