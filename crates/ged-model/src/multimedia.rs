//! Multimedia objects.
//!
//! GEDCOM 5.5 embeds media as encoded `blob` lines with an
//! `embedded_media_format`. GEDCOM 5.5.1 links external files through
//! `file_references` instead. One struct carries both shapes; which fields
//! must be populated depends on the header's version.

use serde::{Deserialize, Serialize};

use crate::{ChangeDate, Citation, CustomTag, Note, UserReference};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Multimedia {
    /// Present on records in the top-level table; absent when embedded.
    pub xref: Option<String>,
    pub file_references: Option<Vec<FileReference>>,
    pub blob: Option<Vec<String>>,
    pub embedded_media_format: Option<String>,
    pub citations: Option<Vec<Citation>>,
    pub notes: Option<Vec<Note>>,
    pub user_references: Option<Vec<UserReference>>,
    pub rec_id_number: Option<String>,
    pub change_date: Option<ChangeDate>,
    /// Continuation of a blob too large for one object.
    pub continued_object: Option<Box<Multimedia>>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

impl Multimedia {
    pub fn with_xref(xref: impl Into<String>) -> Self {
        Self {
            xref: Some(xref.into()),
            ..Self::default()
        }
    }
}

/// A linked external file (5.5.1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReference {
    pub reference_to_file: Option<String>,
    pub format: Option<String>,
    pub media_type: Option<String>,
    pub title: Option<String>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

impl FileReference {
    pub fn new(reference_to_file: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            reference_to_file: Some(reference_to_file.into()),
            format: Some(format.into()),
            ..Self::default()
        }
    }
}

/// A multimedia entry on another record: a token pointing at a record in
/// the top-level multimedia table, or an embedded object.
///
/// Serialized with a `kind` tag so JSON and YAML share one shape:
/// `{kind: reference, xref: "@M1@"}` or `{kind: embedded, blob: [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MultimediaLink {
    Reference { xref: String },
    Embedded(Box<Multimedia>),
}

impl MultimediaLink {
    /// A link to the multimedia record `xref`.
    pub fn reference(xref: impl Into<String>) -> Self {
        Self::Reference { xref: xref.into() }
    }
}
