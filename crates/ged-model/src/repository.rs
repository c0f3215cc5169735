use serde::{Deserialize, Serialize};

use crate::{Address, ChangeDate, CustomTag, Note, UserReference};

/// A repository record (`REPO`): an archive or library holding sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub xref: Option<String>,
    pub name: Option<String>,
    pub address: Option<Address>,
    pub emails: Option<Vec<String>>,
    pub fax_numbers: Option<Vec<String>>,
    pub phone_numbers: Option<Vec<String>>,
    pub www_urls: Option<Vec<String>>,
    pub notes: Option<Vec<Note>>,
    pub user_references: Option<Vec<UserReference>>,
    pub rec_id_number: Option<String>,
    pub change_date: Option<ChangeDate>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

impl Repository {
    pub fn new(xref: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            xref: Some(xref.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
