//! azbake Audio Backend
//!
//! This crate bakes a table of short, seamlessly looping binaural noise
//! buffers, one per azimuth bucket around the listener. Played back on a
//! device that cannot afford real-time spatialization, switching between
//! buckets gives a convincing sense of direction.
//!
//! # Overview
//!
//! Every bucket is derived from one shared carrier:
//!
//! - **Carrier** - Band-limited, exactly periodic noise built in the frequency domain
//! - **Magnitude curves** - Per-ear spectral gains, measured (HRIR files) or analytic (ILD model)
//! - **Synthesis** - Carrier bins scaled by the curve, phase untouched
//! - **Loudness** - One gain per stereo pair so the interaural difference survives
//! - **Limiter** - `tanh` soft clipping below full scale
//! - **Quantization** - TPDF dither, then signed 8-bit
//!
//! # Determinism
//!
//! A config fully determines the output bytes. All randomness comes from one
//! PCG32 stream seeded from the config, consumed in a fixed order: carrier
//! phases first, then each bucket's left dither and right dither.
//!
//! # Example
//!
//! ```no_run
//! use azbake_backend_audio::generate_table;
//! use azbake_spec::PrebakeConfig;
//!
//! let config = PrebakeConfig::builder()
//!     .dataset_dir("hrir/kemar")
//!     .build();
//! let prebake = generate_table(&config)?;
//!
//! println!("table hash: {}", prebake.report.table_hash);
//! # Ok::<(), azbake_backend_audio::PrebakeError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`generate_table()`] - Main entry point
//! - [`carrier`] - Shared periodic noise carrier
//! - [`measured`] - Best-effort HRIR magnitude loader
//! - [`analytic`] - Closed-form ILD model
//! - [`synth`], [`loudness`], [`limiter`], [`quantize`] - Per-bucket stages
//! - [`table`] - Table assembly and the [`TableSink`] trait
//! - [`preview`] - Stereo WAV previews

pub mod analytic;
pub mod carrier;
pub mod curve;
pub mod error;
pub mod generate;
pub mod limiter;
pub mod loudness;
pub mod measured;
pub mod preview;
pub mod quantize;
pub mod rng;
pub mod spectrum;
pub mod synth;
pub mod table;

pub use curve::{CurveSource, MagnitudeCurve, MeasuredLookup};
pub use error::{PrebakeError, PrebakeResult, SinkError};
pub use generate::{
    generate_table, generate_with_dataset, BucketReport, Prebake, PrebakeReport,
};
pub use measured::MeasuredDataset;
pub use preview::WavPreviewSink;
pub use table::{BinauralSample, PrebakeTable, TableAssembler, TableSink};
