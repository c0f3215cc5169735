use serde::{Deserialize, Serialize};

use crate::{Address, ChangeDate, CustomTag, Note};

/// A submitter record (`SUBM`): who contributed the data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Submitter {
    pub xref: Option<String>,
    pub name: Option<String>,
    pub address: Option<Address>,
    pub emails: Option<Vec<String>>,
    pub fax_numbers: Option<Vec<String>>,
    pub phone_numbers: Option<Vec<String>>,
    pub www_urls: Option<Vec<String>>,
    pub language_pref: Option<Vec<String>>,
    pub notes: Option<Vec<Note>>,
    pub rec_id_number: Option<String>,
    pub reg_file_number: Option<String>,
    pub change_date: Option<ChangeDate>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

impl Submitter {
    pub fn new(xref: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            xref: Some(xref.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// The submission record (`SUBN`). A file has exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    pub xref: Option<String>,
    /// Token of the submitter making the submission.
    pub submitter: Option<String>,
    pub name_of_family_file: Option<String>,
    pub temple_code: Option<String>,
    pub ancestors_count: Option<String>,
    pub descendants_count: Option<String>,
    pub ordinance_process_flag: Option<String>,
    pub rec_id_number: Option<String>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

impl Submission {
    pub fn with_xref(xref: impl Into<String>) -> Self {
        Self {
            xref: Some(xref.into()),
            ..Self::default()
        }
    }
}
