//! Events and attributes.
//!
//! Individual events, individual attributes, and family events share one
//! body, [`EventDetail`], and differ only in their type tag and a few extra
//! fields.

use serde::{Deserialize, Serialize};

use crate::{Address, Citation, CustomTag, MultimediaLink, Note, Place};

/// Fields common to every event-like structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDetail {
    pub address: Option<Address>,
    pub age: Option<String>,
    pub cause: Option<String>,
    pub citations: Option<Vec<Citation>>,
    pub date: Option<String>,
    /// Free text on the event line itself. Not standard for events.
    pub description: Option<String>,
    pub emails: Option<Vec<String>>,
    pub fax_numbers: Option<Vec<String>>,
    pub phone_numbers: Option<Vec<String>>,
    pub www_urls: Option<Vec<String>>,
    pub multimedia: Option<Vec<MultimediaLink>>,
    pub notes: Option<Vec<Note>>,
    pub place: Option<Place>,
    pub religious_affiliation: Option<String>,
    pub resp_agency: Option<String>,
    pub restriction_notice: Option<String>,
    pub sub_type: Option<String>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

/// An event in an individual's life (`BIRT`, `DEAT`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct IndividualEvent {
    pub event_type: Option<String>,
    pub detail: EventDetail,
}

impl IndividualEvent {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: Some(event_type.into()),
            detail: EventDetail::default(),
        }
    }
}

/// A fact about an individual (`OCCU`, `RESI`, ...). `description` holds the
/// attribute's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct IndividualAttribute {
    pub attribute_type: Option<String>,
    pub description: Option<String>,
    pub detail: EventDetail,
}

/// An event in a family's life (`MARR`, `DIV`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyEvent {
    pub event_type: Option<String>,
    pub husband_age: Option<String>,
    pub wife_age: Option<String>,
    pub detail: EventDetail,
}

impl FamilyEvent {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: Some(event_type.into()),
            ..Self::default()
        }
    }
}
