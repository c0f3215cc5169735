//! # Supported Format Revisions
//!
//! The engine knows two GEDCOM revisions. Rules that differ between them
//! (embedded multimedia, citations on multimedia) match on
//! [`SupportedVersion`] exhaustively, so adding a revision forces every
//! such rule to be revisited.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GedError;

/// A GEDCOM revision the validator can check against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SupportedVersion {
    /// GEDCOM 5.5. Multimedia is embedded as encoded blob lines.
    #[serde(rename = "5.5")]
    V5_5,
    /// GEDCOM 5.5.1. Multimedia is linked through file references.
    #[serde(rename = "5.5.1")]
    V5_5_1,
}

impl SupportedVersion {
    /// The revision assumed when a header does not say.
    pub const NEWEST: SupportedVersion = SupportedVersion::V5_5_1;

    /// All supported revisions, oldest first.
    pub fn all() -> &'static [SupportedVersion] {
        &[Self::V5_5, Self::V5_5_1]
    }

    /// The version number as written in a GEDCOM header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V5_5 => "5.5",
            Self::V5_5_1 => "5.5.1",
        }
    }
}

impl std::fmt::Display for SupportedVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupportedVersion {
    type Err = GedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "5.5" => Ok(Self::V5_5),
            "5.5.1" => Ok(Self::V5_5_1),
            other => Err(GedError::Serialization(format!(
                "unsupported GEDCOM version: {other:?}"
            ))),
        }
    }
}
