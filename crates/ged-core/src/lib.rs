//! # ged-core: Foundational Types for GEDCOM Validation
//!
//! This crate is the leaf of the workspace dependency graph. It defines the
//! small, stable vocabulary every other `ged-*` crate shares:
//!
//! 1. **Supported format revisions.** `SupportedVersion` covers GEDCOM 5.5
//!    and 5.5.1. Revision-conditional rules match on it exhaustively.
//!
//! 2. **Character-set names.** The closed list of encodings a header may
//!    declare.
//!
//! 3. **Identity-token rules.** `xref_defects()` reports every way a token
//!    fails the `@...@` shape, one defect per violated condition.
//!
//! 4. **Validation options.** `ValidationOptions` is an immutable value
//!    threaded into a validation session. There is no process-wide state.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ged-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod encoding;
pub mod error;
pub mod version;
pub mod xref;

// Re-export primary types for ergonomic imports.
pub use config::{ValidationOptions, DEFAULT_MAX_LANGUAGE_PREFS};
pub use encoding::{
    is_valid_character_set_name, supported_character_set_names, DEFAULT_CHARACTER_SET,
    SUPPORTED_CHARACTER_SETS,
};
pub use error::{ConfigError, GedError};
pub use version::SupportedVersion;
pub use xref::{is_well_formed, xref_defects, XrefDefect, XREF_DELIMITER, XREF_MIN_LENGTH};
