//! # ged-validate: Validation and Auto-Repair
//!
//! Checks a [`Gedcom`](ged_model::Gedcom) record graph against the
//! structural rules of GEDCOM 5.5 and 5.5.1 and, when asked, repairs what
//! can be repaired in place.
//!
//! ## Usage
//!
//! ```
//! use ged_core::ValidationOptions;
//! use ged_model::Gedcom;
//! use ged_validate::GedcomValidator;
//!
//! let mut gedcom = Gedcom::default();
//! let mut validator = GedcomValidator::new(&mut gedcom, ValidationOptions::default());
//! validator.validate();
//! // No submission record: never repairable.
//! assert!(validator.has_errors());
//! ```
//!
//! ## Structure
//!
//! - [`finding`]: the ordered log of issues a pass discovers.
//! - [`reconcile`]: duplicate elimination for list-valued fields.
//! - `context`: check primitives shared by every rule (required/optional
//!   strings, xref shape, list presence, custom tags).
//! - `validators`: one validator per record or substructure kind.
//! - [`session`]: [`GedcomValidator`], the single public entry point.
//!
//! ## Repair Policy
//!
//! One flag, [`ValidationOptions::repair_enabled`](ged_core::ValidationOptions),
//! governs every decision. With repair on, repairable defects are fixed and
//! reported at Info. With repair off, the same defects are reported at Error
//! and the graph is left as it was.

mod context;
pub mod finding;
pub mod reconcile;
pub mod session;
mod validators;

pub use finding::{Finding, Findings, Severity};
pub use reconcile::{count_duplicates, eliminate_duplicates};
pub use session::{GedcomValidator, PassState};
