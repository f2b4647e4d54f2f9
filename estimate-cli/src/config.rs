//! Settings file for the estimate CLI.
//!
//! Settings are read from an optional TOML file. Every key has a default, so
//! an empty file (or no file) is valid. Command-line flags override what the
//! file says.
//!
//! ```toml
//! default_location = "Delhi NCR"
//! processing_delay_ms = 1500
//! log_level = "debug"
//! strict = true
//!
//! [messaging]
//! service_url = "https://wa.me"
//! recipient = "919953330396"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use estimate_core::messaging::MessagingLink;
use estimate_core::{Location, PricingEngine};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 2000;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Location used when none is given.
    pub default_location: String,

    /// Pause before an estimate is shown. Zero disables it.
    pub processing_delay_ms: u64,

    /// Any `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Reject negative area and scope counts.
    pub strict: bool,

    pub messaging: MessagingLink,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_location: Location::Gurgaon.as_str().to_string(),
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
            log_level: "info".to_string(),
            strict: false,
            messaging: MessagingLink::default(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Reads settings from `path` when given, otherwise uses defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn engine(&self) -> PricingEngine {
        if self.strict {
            PricingEngine::strict()
        } else {
            PricingEngine::new()
        }
    }
}
