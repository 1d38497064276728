//! Config loading for CLI commands.

use std::path::{Path, PathBuf};

use azbake_spec::{ConfigError, PrebakeConfig};

/// Command-line overrides applied on top of a loaded config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replaces `seed`.
    pub seed: Option<u32>,
    /// Replaces `dataset_dir`.
    pub dataset: Option<PathBuf>,
    /// Replaces `bucket_count`.
    pub buckets: Option<usize>,
    /// Replaces `loop_len`.
    pub loop_len: Option<usize>,
    /// Replaces `sample_rate`.
    pub sample_rate: Option<u32>,
}

impl ConfigOverrides {
    /// Applies every set override to `config`.
    pub fn apply(&self, config: &mut PrebakeConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(ref dataset) = self.dataset {
            config.dataset_dir = Some(dataset.clone());
        }
        if let Some(buckets) = self.buckets {
            config.bucket_count = buckets;
        }
        if let Some(loop_len) = self.loop_len {
            config.loop_len = loop_len;
        }
        if let Some(sample_rate) = self.sample_rate {
            config.sample_rate = sample_rate;
        }
    }
}

/// Loads the config at `path`, or the defaults when no path is given, then
/// applies `overrides`.
pub fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<PrebakeConfig, ConfigError> {
    let mut config = match path {
        Some(path) => PrebakeConfig::from_file(path)?,
        None => PrebakeConfig::default(),
    };
    overrides.apply(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_path() {
        let config = load_config(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config, PrebakeConfig::default());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("azbake.json");
        std::fs::write(&path, r#"{ "seed": 7, "bucket_count": 16 }"#).unwrap();

        let overrides = ConfigOverrides {
            seed: Some(9),
            loop_len: Some(256),
            ..Default::default()
        };
        let config = load_config(Some(&path), &overrides).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.bucket_count, 16);
        assert_eq!(config.loop_len, 256);
    }

    #[test]
    fn test_unknown_field_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("azbake.json");
        std::fs::write(&path, r#"{ "seeed": 7 }"#).unwrap();
        assert!(matches!(
            load_config(Some(&path), &ConfigOverrides::default()),
            Err(ConfigError::JsonParse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config(
            Some(Path::new("/no/such/azbake.json")),
            &ConfigOverrides::default(),
        );
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
