//! Dataset scanning and filename matching.

use std::path::{Path, PathBuf};

use azbake_spec::{Ear, HeadAzimuth};
use walkdir::WalkDir;

/// The `.wav` files of a measured dataset, in sorted path order.
#[derive(Debug, Clone, Default)]
pub struct MeasuredDataset {
    files: Vec<PathBuf>,
}

impl MeasuredDataset {
    /// Recursively collects the `.wav` files under `root`.
    ///
    /// A missing or unreadable root yields an empty dataset; unreadable
    /// subdirectories are skipped.
    pub fn scan(root: &Path) -> Self {
        if !root.is_dir() {
            log::info!(
                "measured dataset {} not found, using the analytic model",
                root.display()
            );
            return Self::default();
        }

        let files: Vec<PathBuf> = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    log::debug!("skipping unreadable dataset entry: {}", err);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && is_wav(entry.path()))
            .map(|entry| entry.into_path())
            .collect();

        log::info!(
            "measured dataset {}: {} impulse file(s)",
            root.display(),
            files.len()
        );
        Self { files }
    }

    /// Builds a dataset from an explicit file list, keeping the given order.
    pub fn from_files(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    /// Number of candidate files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if the dataset has no candidate files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// First file whose name carries the ear tag and one of the azimuth's labels.
    pub fn find(&self, azimuth: HeadAzimuth, ear: Ear) -> Option<&Path> {
        let labels = azimuth.labels();
        self.files
            .iter()
            .find(|path| matches_name(path, &labels, ear))
            .map(PathBuf::as_path)
    }
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("wav"))
        .unwrap_or(false)
}

fn matches_name(path: &Path, labels: &[String; 2], ear: Ear) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.contains(ear.tag()) && labels.iter().any(|label| name.contains(label.as_str()))
}
