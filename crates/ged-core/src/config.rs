//! # Validation Options
//!
//! The configuration surface of a validation session. A session receives
//! one immutable [`ValidationOptions`] at construction and hands it to every
//! child validator, so no rule ever consults global state.
//!
//! Options are usually built in code (`ValidationOptions::default()`,
//! `ValidationOptions::strict()`), or loaded from a YAML document:
//!
//! ```yaml
//! repair_enabled: false
//! max_language_prefs: 5
//! ```
//!
//! Missing fields take their defaults. Unknown fields are rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default cap on a submitter's language-preference list.
pub const DEFAULT_MAX_LANGUAGE_PREFS: usize = 3;

/// Policy and per-rule tunables for a validation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationOptions {
    /// Correct repairable defects in place (reported at Info) instead of
    /// reporting them at Error.
    pub repair_enabled: bool,

    /// Require every list-valued field to be present, even when empty.
    /// When off, an absent list is accepted silently.
    pub collection_initialization: bool,

    /// Maximum number of language preferences on a submitter.
    pub max_language_prefs: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            repair_enabled: true,
            collection_initialization: true,
            max_language_prefs: DEFAULT_MAX_LANGUAGE_PREFS,
        }
    }
}

impl ValidationOptions {
    /// Defaults with repair disabled.
    pub fn strict() -> Self {
        Self {
            repair_enabled: false,
            ..Self::default()
        }
    }

    /// Builder-style override of the repair policy.
    pub fn with_repair(mut self, repair_enabled: bool) -> Self {
        self.repair_enabled = repair_enabled;
        self
    }

    /// Parse and range-check options from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_yaml::from_str(yaml)?;
        options.check()?;
        Ok(options)
    }

    /// Read, parse, and range-check options from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Reject values no rule can work with.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.max_language_prefs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_language_prefs",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
