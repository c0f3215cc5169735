//! # ged-model: The GEDCOM Record Graph
//!
//! Data holders for a parsed GEDCOM file. The graph is produced by a parser
//! and consumed by a writer, neither of which lives here; this crate only
//! defines the shapes and how to load/store them as JSON or YAML.
//!
//! ## Layout
//!
//! - **Records** (individual, family, source, repository, multimedia, note,
//!   submitter) live in flat `BTreeMap<String, _>` tables on [`Gedcom`],
//!   keyed by their identity token.
//! - **Relationships between records are tokens.** A family names its
//!   husband, wife, and children by xref; an individual lists the families it
//!   belongs to by xref. Nothing owns another record, so the individual/family
//!   reference cycle exists only as data.
//! - **Substructures** (events, citations, places, names, ...) are owned
//!   values inside exactly one parent.
//! - **List-valued fields are `Option<Vec<T>>`.** `None` is the absent state
//!   a validator may be asked to repair. Access goes through [`ListSlot`].
//!
//! Every type derives value equality and hashing so duplicate list entries
//! can be detected by value.

pub mod address;
pub mod citation;
pub mod common;
pub mod element;
pub mod event;
pub mod family;
pub mod gedcom;
pub mod header;
pub mod individual;
pub mod list;
pub mod multimedia;
pub mod name;
pub mod note;
pub mod place;
pub mod repository;
pub mod source;
pub mod submitter;

pub use address::Address;
pub use citation::{Citation, CitationWithSource, CitationWithoutSource};
pub use common::{ChangeDate, CustomTag, UserReference};
pub use element::{Element, ElementKind, Subject};
pub use event::{EventDetail, FamilyEvent, IndividualAttribute, IndividualEvent};
pub use family::{Family, LdsSpouseSealing};
pub use gedcom::{Gedcom, Trailer};
pub use header::{CharacterSet, Corporation, GedcomVersion, Header, HeaderSourceData, SourceSystem};
pub use individual::{AdoptedBy, Association, FamilyChild, FamilySpouse, Individual};
pub use list::ListSlot;
pub use multimedia::{FileReference, Multimedia, MultimediaLink};
pub use name::{PersonalName, PersonalNameVariation};
pub use note::Note;
pub use place::{Place, PlaceNameVariation};
pub use repository::Repository;
pub use source::{EventRecorded, RepositoryCitation, Source, SourceCallNumber, SourceData};
pub use submitter::{Submission, Submitter};
