//! Stereo WAV previews of a table.

use std::path::{Path, PathBuf};

use crate::error::SinkError;
use crate::table::{PrebakeTable, TableSink};

/// Writes one stereo 8-bit WAV per bucket, named `{prefix}_{index:02}.wav`.
#[derive(Debug, Clone)]
pub struct WavPreviewSink {
    dir: PathBuf,
    prefix: String,
    sample_rate: u32,
    written: Vec<PathBuf>,
}

impl WavPreviewSink {
    /// Creates a sink writing into `dir`, which is created if needed.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, sample_rate: u32) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            sample_rate,
            written: Vec::new(),
        }
    }

    /// Paths written by the last [`TableSink::write_table`] call.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}_{:02}.wav", self.prefix, index))
    }
}

impl TableSink for WavPreviewSink {
    fn write_table(&mut self, table: &PrebakeTable) -> Result<(), SinkError> {
        std::fs::create_dir_all(&self.dir)?;
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: self.sample_rate,
            bits_per_sample: 8,
            sample_format: hound::SampleFormat::Int,
        };

        self.written.clear();
        for (index, bucket) in table.iter().enumerate() {
            let path = self.path_for(index);
            write_stereo(&path, spec, &bucket.interleaved())?;
            log::debug!("wrote preview {}", path.display());
            self.written.push(path);
        }
        Ok(())
    }
}

fn write_stereo(path: &Path, spec: hound::WavSpec, frames: &[i8]) -> Result<(), SinkError> {
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in frames {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}
