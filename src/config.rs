//! Scanner configuration loaded from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Lexicon, ScanError, ScanResult};

/// Configuration for a scan run.
///
/// ```toml
/// seed = 42
/// lexicon = "lexicon.toml"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Seed for the placeholder style scorer. `None` draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Lexicon file replacing the built-in word lists. Relative paths are
    /// resolved against the directory of the config file.
    #[serde(default)]
    pub lexicon: Option<PathBuf>,
}

impl ScanConfig {
    /// Load from a TOML file. A missing file yields the default config.
    pub fn load(path: &Path) -> ScanResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ScanError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| ScanError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        if let (Some(lexicon), Some(base)) = (config.lexicon.as_mut(), path.parent()) {
            if lexicon.is_relative() {
                *lexicon = base.join(&*lexicon);
            }
        }

        Ok(config)
    }

    /// Build the lexicon this config asks for.
    pub fn lexicon(&self) -> ScanResult<Lexicon> {
        match &self.lexicon {
            Some(path) => Lexicon::load(path),
            None => Ok(Lexicon::default()),
        }
    }
}
