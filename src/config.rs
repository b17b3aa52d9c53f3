// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exploration settings.
//!
//! [`ExplorationConfig::load`] layers, in increasing priority:
//! built-in defaults, an optional file (any format the `config` crate
//! recognises by extension), and `PARIKH_*` environment variables such as
//! `PARIKH_ALPHABET_SIZE=3` or `PARIKH_MAX_DEPTH=5`.

use crate::enumerator::EnumeratorOptions;
use crate::error::{ParikhError, Result};
use crate::monotonicity::DifferencePass;
use crate::parikh::{Alphabet, MAX_ALPHABET_SIZE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Output format of the binary's log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one exploration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorationConfig {
    /// σ, the number of symbols.
    #[serde(default = "default_alphabet_size")]
    pub alphabet_size: usize,

    /// Deepest level to enumerate. Unbounded when absent.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Stop after this many families have been examined.
    #[serde(default)]
    pub max_families: Option<u64>,

    /// Stop once this many seconds have elapsed.
    #[serde(default)]
    pub time_budget_secs: Option<u64>,

    /// Stop at the first family no word realizes.
    #[serde(default)]
    pub stop_on_counterexample: bool,

    /// Fixed bound on reconstructed word length. Takes precedence over
    /// `word_length_factor`.
    #[serde(default)]
    pub max_word_length: Option<usize>,

    /// Bound reconstructed words of a depth-n family to `factor * (n + 1)`
    /// symbols. With neither bound set, reconstruction is unbounded and may
    /// not terminate.
    #[serde(default = "default_word_length_factor")]
    pub word_length_factor: Option<usize>,

    #[serde(default)]
    pub difference_pass: DifferencePass,

    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            alphabet_size: default_alphabet_size(),
            max_depth: None,
            max_families: None,
            time_budget_secs: None,
            stop_on_counterexample: false,
            max_word_length: None,
            word_length_factor: default_word_length_factor(),
            difference_pass: DifferencePass::default(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_alphabet_size() -> usize {
    2
}

fn default_word_length_factor() -> Option<usize> {
    Some(3)
}

impl ExplorationConfig {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// A file named explicitly must exist.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_error = |err: config::ConfigError| ParikhError::Config(err.to_string());
        let mut builder = config::Config::builder();

        builder = builder.add_source(
            config::Config::try_from(&ExplorationConfig::default()).map_err(config_error)?,
        );

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        // Field names contain '_', so no nesting separator is configured.
        builder = builder.add_source(config::Environment::with_prefix("PARIKH").try_parsing(true));

        let loaded: ExplorationConfig = builder
            .build()
            .map_err(config_error)?
            .try_deserialize()
            .map_err(config_error)?;
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> Result<()> {
        if self.alphabet_size == 0 || self.alphabet_size > MAX_ALPHABET_SIZE {
            return Err(ParikhError::InvalidAlphabetSize {
                size: self.alphabet_size,
                max: MAX_ALPHABET_SIZE,
            });
        }
        if self.max_depth == Some(0) {
            return Err(ParikhError::Config("max_depth must be at least 1".into()));
        }
        if self.word_length_factor == Some(0) {
            return Err(ParikhError::Config("word_length_factor must be at least 1".into()));
        }
        Ok(())
    }

    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(self.alphabet_size)
    }

    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_secs.map(Duration::from_secs)
    }

    /// Word-length bound for reconstructing a family of the given depth.
    pub fn word_length_limit(&self, depth: usize) -> Option<usize> {
        self.max_word_length
            .or_else(|| self.word_length_factor.map(|factor| factor * (depth + 1)))
    }

    pub fn enumerator_options(&self) -> EnumeratorOptions {
        EnumeratorOptions {
            max_depth: self.max_depth,
            difference_pass: self.difference_pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExplorationConfig::default();
        assert_eq!(config.alphabet_size, 2);
        assert_eq!(config.max_depth, None);
        assert!(!config.stop_on_counterexample);
        assert_eq!(config.difference_pass, DifferencePass::AllLevels);
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_word_length_limit() {
        let mut config = ExplorationConfig::default();
        assert_eq!(config.word_length_limit(2), Some(9));
        config.max_word_length = Some(5);
        assert_eq!(config.word_length_limit(2), Some(5));
        config.max_word_length = None;
        config.word_length_factor = None;
        assert_eq!(config.word_length_limit(2), None);
    }

    #[test]
    fn test_validate_rejects_bad_alphabet() {
        let config = ExplorationConfig {
            alphabet_size: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ParikhError::InvalidAlphabetSize { size: 0, max: 26 })
        );
        let config = ExplorationConfig {
            alphabet_size: 27,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let config = ExplorationConfig {
            max_depth: Some(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ParikhError::Config(_))));
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: ExplorationConfig = serde_json::from_str(
            r#"{"alphabet_size": 3, "max_depth": 4, "difference_pass": "top_level_only"}"#,
        )
        .unwrap();
        assert_eq!(config.alphabet_size, 3);
        assert_eq!(config.max_depth, Some(4));
        assert_eq!(config.difference_pass, DifferencePass::TopLevelOnly);
        assert_eq!(config.word_length_factor, Some(3));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("parikh-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"alphabet_size": 3, "max_families": 100}"#).unwrap();
        let config = ExplorationConfig::load(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.alphabet_size, 3);
        assert_eq!(config.max_families, Some(100));
        assert_eq!(config.max_depth, None);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = ExplorationConfig::load(Some("/nonexistent/parikh-config.json"));
        assert!(matches!(result, Err(ParikhError::Config(_))));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ExplorationConfig::load(None).unwrap();
        assert_eq!(config.alphabet_size, 2);
        assert_eq!(config.word_length_factor, Some(3));
    }
}
