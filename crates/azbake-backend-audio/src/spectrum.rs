//! Real-signal FFT helpers.
//!
//! Every signal in the pipeline is a real loop of fixed even length L. Its
//! spectrum is kept as the L/2 + 1 non-negative frequency bins; the negative
//! half is implied by Hermitian symmetry.

use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

/// Non-negative frequency bins of a real signal of length `len`.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    len: usize,
    bins: Vec<Complex<f64>>,
}

impl Spectrum {
    /// Wraps `len / 2 + 1` bins of a length-`len` signal.
    ///
    /// # Panics
    /// Panics if the bin count does not match `len`.
    pub fn from_bins(len: usize, bins: Vec<Complex<f64>>) -> Self {
        assert_eq!(bins.len(), len / 2 + 1, "bin count does not match length");
        Self { len, bins }
    }

    /// Time-domain length of the signal this spectrum describes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true for the spectrum of an empty signal.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bins (L/2 + 1).
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// The bins, DC first.
    pub fn bins(&self) -> &[Complex<f64>] {
        &self.bins
    }

    /// Magnitude of every bin.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.norm()).collect()
    }

    /// Scales each bin by a real, non-negative gain, leaving phase untouched.
    ///
    /// # Panics
    /// Panics if `gains` does not have one entry per bin.
    pub fn scaled_by(&self, gains: &[f64]) -> Spectrum {
        assert_eq!(gains.len(), self.bins.len(), "gain count does not match bins");
        let bins = self
            .bins
            .iter()
            .zip(gains)
            .map(|(bin, &gain)| *bin * gain)
            .collect();
        Spectrum {
            len: self.len,
            bins,
        }
    }
}

/// Forward and inverse real FFT plans for one fixed length.
pub struct RealFft {
    len: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl RealFft {
    /// Plans transforms of length `len`.
    ///
    /// # Panics
    /// Panics if `len` is odd or zero.
    pub fn new(len: usize) -> Self {
        assert!(len > 0 && len % 2 == 0, "real FFT length must be even, got {len}");
        let mut planner = FftPlanner::new();
        Self {
            len,
            forward: planner.plan_fft_forward(len),
            inverse: planner.plan_fft_inverse(len),
        }
    }

    /// Transform length L.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a plan has a positive length.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of non-negative frequency bins (L/2 + 1).
    pub fn bin_count(&self) -> usize {
        self.len / 2 + 1
    }

    /// Forward transform of a real signal.
    ///
    /// Shorter inputs are zero-padded to L; longer inputs are truncated.
    pub fn forward(&self, signal: &[f64]) -> Spectrum {
        let mut buffer: Vec<Complex<f64>> = (0..self.len)
            .map(|i| Complex::new(signal.get(i).copied().unwrap_or(0.0), 0.0))
            .collect();
        self.forward.process(&mut buffer);
        buffer.truncate(self.bin_count());
        Spectrum::from_bins(self.len, buffer)
    }

    /// Inverse transform back to a real signal of length L.
    ///
    /// The imaginary parts of the DC and Nyquist bins are ignored, which is
    /// what makes the result exactly real and exactly periodic in L.
    ///
    /// # Panics
    /// Panics if the spectrum was built for a different length.
    pub fn inverse(&self, spectrum: &Spectrum) -> Vec<f64> {
        assert_eq!(spectrum.len(), self.len, "spectrum length does not match plan");
        let half = self.len / 2;
        let bins = spectrum.bins();

        let mut buffer = vec![Complex::new(0.0, 0.0); self.len];
        buffer[0] = Complex::new(bins[0].re, 0.0);
        for k in 1..half {
            buffer[k] = bins[k];
            buffer[self.len - k] = bins[k].conj();
        }
        buffer[half] = Complex::new(bins[half].re, 0.0);

        self.inverse.process(&mut buffer);

        let scale = 1.0 / self.len as f64;
        buffer.iter().map(|c| c.re * scale).collect()
    }
}

impl std::fmt::Debug for RealFft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealFft").field("len", &self.len).finish()
    }
}
