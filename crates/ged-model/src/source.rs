use serde::{Deserialize, Serialize};

use crate::{ChangeDate, CustomTag, MultimediaLink, Note, UserReference};

/// A source record (`SOUR`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    pub xref: Option<String>,
    pub data: Option<SourceData>,
    pub title: Option<Vec<String>>,
    pub originators_authors: Option<Vec<String>>,
    pub publication_facts: Option<Vec<String>>,
    pub source_text: Option<Vec<String>>,
    pub source_filed_by: Option<String>,
    pub repository_citation: Option<RepositoryCitation>,
    pub multimedia: Option<Vec<MultimediaLink>>,
    pub notes: Option<Vec<Note>>,
    pub user_references: Option<Vec<UserReference>>,
    pub rec_id_number: Option<String>,
    pub change_date: Option<ChangeDate>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

impl Source {
    pub fn with_xref(xref: impl Into<String>) -> Self {
        Self {
            xref: Some(xref.into()),
            ..Self::default()
        }
    }
}

/// What a source records (`DATA`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceData {
    pub events_recorded: Option<Vec<EventRecorded>>,
    pub resp_agency: Option<String>,
    pub notes: Option<Vec<Note>>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecorded {
    pub event_type: Option<String>,
    pub date_period: Option<String>,
    pub jurisdiction: Option<String>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

/// Where a source is held (`REPO`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryCitation {
    pub repository_xref: Option<String>,
    pub call_numbers: Option<Vec<SourceCallNumber>>,
    pub notes: Option<Vec<Note>>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceCallNumber {
    pub call_number: Option<String>,
    pub media_type: Option<String>,
    pub custom_tags: Option<Vec<CustomTag>>,
}
