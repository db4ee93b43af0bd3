//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ROOT_CANDIDATE_MAX_LEN;
use crate::context::Process;

/// Errors reading an [`EngineConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// JSON could not be parsed into a configuration
    #[error("Failed to parse configuration")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the engine cannot work with
    #[error("Invalid configuration value for {0}")]
    Invalid(&'static str),
}

/// Longest replacement, in phonemes, accepted per morphological process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplacementLimits {
    pub declension: Option<usize>,
    pub conjugation: Option<usize>,
    pub derivation: Option<usize>,
    pub sandhi: Option<usize>,
    pub general: Option<usize>,
}

impl ReplacementLimits {
    pub const fn default() -> ReplacementLimits {
        ReplacementLimits {
            declension: Some(4),
            conjugation: Some(5),
            derivation: Some(6),
            sandhi: Some(3),
            general: None,
        }
    }

    /// `None` means unbounded.
    pub fn limit_for(&self, process: Process) -> Option<usize> {
        match process {
            Process::Declension => self.declension,
            Process::Conjugation => self.conjugation,
            Process::Derivation => self.derivation,
            Process::Sandhi => self.sandhi,
            Process::General => self.general,
        }
    }
}

impl Default for ReplacementLimits {
    fn default() -> Self {
        ReplacementLimits::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Words of at most this many phonemes are treated as candidate verbal
    /// roots when the caller does not say. An approximation.
    pub root_candidate_max_len: usize,
    pub replacement_limits: ReplacementLimits,
    /// Lower-case IAST before segmenting.
    pub normalize_case: bool,
}

impl EngineConfig {
    pub const fn default() -> EngineConfig {
        EngineConfig {
            root_candidate_max_len: DEFAULT_ROOT_CANDIDATE_MAX_LEN,
            replacement_limits: ReplacementLimits::default(),
            normalize_case: true,
        }
    }

    /// Reads a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<EngineConfig, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_candidate_max_len == 0 {
            return Err(ConfigError::Invalid("root_candidate_max_len"));
        }

        let limits = &self.replacement_limits;
        let named = [
            ("replacement_limits.declension", limits.declension),
            ("replacement_limits.conjugation", limits.conjugation),
            ("replacement_limits.derivation", limits.derivation),
            ("replacement_limits.sandhi", limits.sandhi),
            ("replacement_limits.general", limits.general),
        ];

        for &(name, limit) in named.iter() {
            if limit == Some(0) {
                return Err(ConfigError::Invalid(name));
            }
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig::default()
    }
}
