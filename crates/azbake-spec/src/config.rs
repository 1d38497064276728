//! Prebake configuration.
//!
//! The configuration is fixed per build invocation and threaded explicitly
//! into the pipeline entry point. Every field carries a default equal to the
//! reference build, so an empty JSON object is a valid config.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::AzimuthBucket;

/// Default mixer rate of the target playback engine, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 18157;

/// Default loop length in samples.
pub const DEFAULT_LOOP_LEN: usize = 16384;

/// Default number of azimuth buckets around the head.
pub const DEFAULT_BUCKET_COUNT: usize = 32;

/// Default random seed.
pub const DEFAULT_SEED: u32 = 1337;

/// Complete configuration for one prebake run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrebakeConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Loop length L in samples (even; a power of two is recommended).
    pub loop_len: usize,
    /// Number of evenly spaced azimuth buckets.
    pub bucket_count: usize,
    /// Seed of the single sequential random stream.
    pub seed: u32,
    /// Optional directory of measured impulse-response WAV files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_dir: Option<PathBuf>,
    /// Carrier noise shaping.
    pub carrier: CarrierParams,
    /// Pair loudness normalization.
    pub loudness: LoudnessParams,
    /// Soft limiter.
    pub limiter: LimiterParams,
    /// Dither applied before quantization.
    pub dither: DitherParams,
    /// Analytic ILD model.
    pub analytic: AnalyticParams,
    /// Measured magnitude loader.
    pub measured: MeasuredParams,
}

impl Default for PrebakeConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            loop_len: DEFAULT_LOOP_LEN,
            bucket_count: DEFAULT_BUCKET_COUNT,
            seed: DEFAULT_SEED,
            dataset_dir: None,
            carrier: CarrierParams::default(),
            loudness: LoudnessParams::default(),
            limiter: LimiterParams::default(),
            dither: DitherParams::default(),
            analytic: AnalyticParams::default(),
            measured: MeasuredParams::default(),
        }
    }
}

impl PrebakeConfig {
    /// Creates a builder starting from the default config.
    pub fn builder() -> PrebakeConfigBuilder {
        PrebakeConfigBuilder::default()
    }

    /// Parses a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serializes the config as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of non-negative frequency bins (L/2 + 1).
    pub fn bin_count(&self) -> usize {
        self.loop_len / 2 + 1
    }

    /// Nyquist frequency in Hz.
    pub fn nyquist_hz(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }

    /// Returns the bucket at `index` in canonical table order.
    ///
    /// # Panics
    /// Panics if `index >= bucket_count`.
    pub fn bucket(&self, index: usize) -> AzimuthBucket {
        AzimuthBucket::new(index, self.bucket_count)
    }

    /// Iterates over all buckets in canonical table order.
    pub fn buckets(&self) -> impl Iterator<Item = AzimuthBucket> + '_ {
        (0..self.bucket_count).map(move |i| self.bucket(i))
    }
}

/// Band-limited noise carrier parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarrierParams {
    /// Lower pass-band edge in Hz.
    pub band_lo_hz: f64,
    /// Upper pass-band edge in Hz.
    pub band_hi_hz: f64,
    /// Width of the linear ramp outside each edge, in Hz.
    pub edge_ramp_hz: f64,
}

impl Default for CarrierParams {
    fn default() -> Self {
        Self {
            band_lo_hz: 120.0,
            band_hi_hz: 8000.0,
            edge_ramp_hz: 200.0,
        }
    }
}

/// Pair loudness normalization parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoudnessParams {
    /// Combined RMS of the (left, right) pair after normalization.
    pub target_rms: f64,
}

impl Default for LoudnessParams {
    fn default() -> Self {
        Self { target_rms: 0.5 }
    }
}

/// Soft limiter parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimiterParams {
    /// Asymptotic output ceiling; `1.0` is a plain `tanh`.
    pub ceiling: f64,
}

impl Default for LimiterParams {
    fn default() -> Self {
        Self { ceiling: 1.0 }
    }
}

/// Dither parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DitherParams {
    /// Peak TPDF dither amplitude in 8-bit quantization steps. `0.0` disables
    /// dither but the random draws are still consumed.
    pub amplitude_lsb: f64,
}

impl Default for DitherParams {
    fn default() -> Self {
        Self { amplitude_lsb: 1.0 }
    }
}

/// Analytic ILD model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyticParams {
    /// ILD at ±90° head azimuth, in dB.
    pub max_ild_db: f64,
    /// Exponent applied to normalized frequency for the ILD shelf.
    pub ild_exponent: f64,
    /// Extra high-frequency loss at Nyquist for rear sources, in dB.
    pub rear_loss_db: f64,
    /// Exponent applied to normalized frequency for the rear loss.
    pub rear_exponent: f64,
    /// Minimum linear gain of any bin.
    pub gain_floor: f64,
}

impl Default for AnalyticParams {
    fn default() -> Self {
        Self {
            max_ild_db: 12.0,
            ild_exponent: 0.5,
            rear_loss_db: 6.0,
            rear_exponent: 0.7,
            gain_floor: 0.25,
        }
    }
}

/// How a bucket falls back when measured data is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Each ear falls back to the analytic model independently.
    #[default]
    PerEar,
    /// If either ear is unavailable, both ears of the bucket use the analytic model.
    Pair,
}

/// Measured magnitude loader parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeasuredParams {
    /// Minimum number of impulse taps kept (the limit is `max(min_taps, L/4)`).
    pub min_taps: usize,
    /// Gaussian smoothing width in frequency bins.
    pub smoothing_sigma: f64,
    /// Fallback policy for unavailable curves.
    pub fallback: FallbackPolicy,
}

impl Default for MeasuredParams {
    fn default() -> Self {
        Self {
            min_taps: 64,
            smoothing_sigma: 1.5,
            fallback: FallbackPolicy::PerEar,
        }
    }
}

/// Builder for [`PrebakeConfig`].
#[derive(Debug, Clone, Default)]
pub struct PrebakeConfigBuilder {
    config: PrebakeConfig,
}

impl PrebakeConfigBuilder {
    /// Sets the output sample rate.
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.config.sample_rate = sample_rate;
        self
    }

    /// Sets the loop length.
    pub fn loop_len(mut self, loop_len: usize) -> Self {
        self.config.loop_len = loop_len;
        self
    }

    /// Sets the azimuth bucket count.
    pub fn bucket_count(mut self, bucket_count: usize) -> Self {
        self.config.bucket_count = bucket_count;
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.config.seed = seed;
        self
    }

    /// Sets the measured dataset directory.
    pub fn dataset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.dataset_dir = Some(dir.into());
        self
    }

    /// Sets the carrier pass band.
    pub fn band(mut self, lo_hz: f64, hi_hz: f64) -> Self {
        self.config.carrier.band_lo_hz = lo_hz;
        self.config.carrier.band_hi_hz = hi_hz;
        self
    }

    /// Sets the target pair RMS.
    pub fn target_rms(mut self, target_rms: f64) -> Self {
        self.config.loudness.target_rms = target_rms;
        self
    }

    /// Sets the measured fallback policy.
    pub fn fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.config.measured.fallback = fallback;
        self
    }

    /// Builds the config.
    pub fn build(self) -> PrebakeConfig {
        self.config
    }
}
