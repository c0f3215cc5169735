//! # Element Subjects
//!
//! A finding points at the element it is about. The pointer is a
//! [`Subject`]: the element's kind plus, for records, its identity token.
//! It is a plain value, so it never borrows or keeps the graph alive.

use serde::{Deserialize, Serialize};

use crate::{
    Address, Association, ChangeDate, CharacterSet, Citation, Corporation, CustomTag,
    EventRecorded, Family, FamilyChild, FamilyEvent, FamilySpouse, FileReference, Gedcom,
    GedcomVersion, Header, HeaderSourceData, Individual, IndividualAttribute, IndividualEvent,
    LdsSpouseSealing, Multimedia, Note, PersonalName, PersonalNameVariation, Place,
    PlaceNameVariation, Repository, RepositoryCitation, Source, SourceCallNumber, SourceData,
    SourceSystem, Submission, Submitter, Trailer, UserReference,
};

/// Every kind of element a finding can be about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Gedcom,
    Header,
    CharacterSet,
    GedcomVersion,
    SourceSystem,
    Corporation,
    HeaderSourceData,
    Trailer,
    Submitter,
    Submission,
    Individual,
    FamilyChild,
    FamilySpouse,
    Association,
    IndividualEvent,
    IndividualAttribute,
    Family,
    FamilyEvent,
    LdsSpouseSealing,
    Source,
    SourceData,
    EventRecorded,
    RepositoryCitation,
    SourceCallNumber,
    Repository,
    Multimedia,
    FileReference,
    Note,
    CitationWithSource,
    CitationWithoutSource,
    PersonalName,
    PersonalNameVariation,
    Place,
    PlaceNameVariation,
    Address,
    ChangeDate,
    UserReference,
    CustomTag,
}

impl ElementKind {
    /// Type-style name used in finding descriptions ("... on Individual").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gedcom => "Gedcom",
            Self::Header => "Header",
            Self::CharacterSet => "CharacterSet",
            Self::GedcomVersion => "GedcomVersion",
            Self::SourceSystem => "SourceSystem",
            Self::Corporation => "Corporation",
            Self::HeaderSourceData => "HeaderSourceData",
            Self::Trailer => "Trailer",
            Self::Submitter => "Submitter",
            Self::Submission => "Submission",
            Self::Individual => "Individual",
            Self::FamilyChild => "FamilyChild",
            Self::FamilySpouse => "FamilySpouse",
            Self::Association => "Association",
            Self::IndividualEvent => "IndividualEvent",
            Self::IndividualAttribute => "IndividualAttribute",
            Self::Family => "Family",
            Self::FamilyEvent => "FamilyEvent",
            Self::LdsSpouseSealing => "LdsSpouseSealing",
            Self::Source => "Source",
            Self::SourceData => "SourceData",
            Self::EventRecorded => "EventRecorded",
            Self::RepositoryCitation => "RepositoryCitation",
            Self::SourceCallNumber => "SourceCallNumber",
            Self::Repository => "Repository",
            Self::Multimedia => "Multimedia",
            Self::FileReference => "FileReference",
            Self::Note => "Note",
            Self::CitationWithSource => "CitationWithSource",
            Self::CitationWithoutSource => "CitationWithoutSource",
            Self::PersonalName => "PersonalName",
            Self::PersonalNameVariation => "PersonalNameVariation",
            Self::Place => "Place",
            Self::PlaceNameVariation => "PlaceNameVariation",
            Self::Address => "Address",
            Self::ChangeDate => "ChangeDate",
            Self::UserReference => "UserReference",
            Self::CustomTag => "CustomTag",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-owning description of the element a finding is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    /// What kind of element.
    pub kind: ElementKind,
    /// The element's own identity token, for records that have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xref: Option<String>,
}

impl Subject {
    /// A subject with no identity token.
    pub fn new(kind: ElementKind) -> Self {
        Self { kind, xref: None }
    }

    /// A subject identified by `xref`.
    pub fn with_xref(kind: ElementKind, xref: impl Into<String>) -> Self {
        Self {
            kind,
            xref: Some(xref.into()),
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.xref {
            Some(xref) => write!(f, "{} {}", self.kind, xref),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Anything a finding can point at.
pub trait Element {
    /// The element's kind.
    fn kind(&self) -> ElementKind;

    /// The element's own identity token. Substructures have none.
    fn xref(&self) -> Option<&str> {
        None
    }

    /// A [`Subject`] describing this element.
    fn subject(&self) -> Subject {
        Subject {
            kind: self.kind(),
            xref: self.xref().map(str::to_owned),
        }
    }
}

macro_rules! element {
    ($ty:ty => $kind:ident) => {
        impl Element for $ty {
            fn kind(&self) -> ElementKind {
                ElementKind::$kind
            }
        }
    };
    ($ty:ty => $kind:ident, xref) => {
        impl Element for $ty {
            fn kind(&self) -> ElementKind {
                ElementKind::$kind
            }

            fn xref(&self) -> Option<&str> {
                self.xref.as_deref()
            }
        }
    };
}

element!(Gedcom => Gedcom);
element!(Header => Header);
element!(CharacterSet => CharacterSet);
element!(GedcomVersion => GedcomVersion);
element!(SourceSystem => SourceSystem);
element!(Corporation => Corporation);
element!(HeaderSourceData => HeaderSourceData);
element!(Trailer => Trailer);
element!(Submitter => Submitter, xref);
element!(Submission => Submission, xref);
element!(Individual => Individual, xref);
element!(FamilyChild => FamilyChild);
element!(FamilySpouse => FamilySpouse);
element!(Association => Association);
element!(IndividualEvent => IndividualEvent);
element!(IndividualAttribute => IndividualAttribute);
element!(Family => Family, xref);
element!(FamilyEvent => FamilyEvent);
element!(LdsSpouseSealing => LdsSpouseSealing);
element!(Source => Source, xref);
element!(SourceData => SourceData);
element!(EventRecorded => EventRecorded);
element!(RepositoryCitation => RepositoryCitation);
element!(SourceCallNumber => SourceCallNumber);
element!(Repository => Repository, xref);
element!(Multimedia => Multimedia, xref);
element!(FileReference => FileReference);
element!(Note => Note, xref);
element!(PersonalName => PersonalName);
element!(PersonalNameVariation => PersonalNameVariation);
element!(Place => Place);
element!(PlaceNameVariation => PlaceNameVariation);
element!(Address => Address);
element!(ChangeDate => ChangeDate);
element!(UserReference => UserReference);
element!(CustomTag => CustomTag);

impl Element for Citation {
    fn kind(&self) -> ElementKind {
        match self {
            Citation::WithSource(_) => ElementKind::CitationWithSource,
            Citation::WithoutSource(_) => ElementKind::CitationWithoutSource,
        }
    }
}
