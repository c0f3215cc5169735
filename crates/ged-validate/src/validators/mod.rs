//! Per-kind validators.
//!
//! Each validator borrows the pass's [`ValidationContext`] and the one
//! element it checks, runs its rules in `validate(self)`, and is dropped.
//! Substructures are checked by constructing the child's validator with the
//! same context.
//!
//! [`ValidationContext`]: crate::context::ValidationContext

mod address;
mod citation;
mod event;
mod family;
mod header;
mod individual;
mod lds;
mod multimedia;
mod name;
mod note;
mod place;
mod repository;
mod source;
mod submitter;

pub(crate) use address::AddressValidator;
pub(crate) use citation::CitationValidator;
pub(crate) use event::EventValidator;
pub(crate) use family::FamilyValidator;
pub(crate) use header::HeaderValidator;
pub(crate) use individual::IndividualValidator;
pub(crate) use lds::LdsSpouseSealingValidator;
pub(crate) use multimedia::MultimediaValidator;
pub(crate) use name::PersonalNameValidator;
pub(crate) use note::NoteValidator;
pub(crate) use place::PlaceValidator;
pub(crate) use repository::RepositoryValidator;
pub(crate) use source::SourceValidator;
pub(crate) use submitter::{SubmissionValidator, SubmitterValidator};
