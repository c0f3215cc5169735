use serde::{Deserialize, Serialize};

use crate::{ChangeDate, Citation, CustomTag, FamilyEvent, MultimediaLink, Note, UserReference};

/// A family record (`FAM`). Husband, wife, and children are individual
/// tokens resolved against the root's individual table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Family {
    pub xref: Option<String>,
    pub husband: Option<String>,
    pub wife: Option<String>,
    pub children: Option<Vec<String>>,
    pub events: Option<Vec<FamilyEvent>>,
    pub citations: Option<Vec<Citation>>,
    pub lds_spouse_sealings: Option<Vec<LdsSpouseSealing>>,
    pub multimedia: Option<Vec<MultimediaLink>>,
    pub notes: Option<Vec<Note>>,
    /// Tokens of submitters of this family.
    pub submitters: Option<Vec<String>>,
    pub user_references: Option<Vec<UserReference>>,
    pub automated_record_id: Option<String>,
    pub num_children: Option<String>,
    pub rec_file_number: Option<String>,
    pub restriction_notice: Option<String>,
    pub change_date: Option<ChangeDate>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

impl Family {
    pub fn with_xref(xref: impl Into<String>) -> Self {
        Self {
            xref: Some(xref.into()),
            ..Self::default()
        }
    }
}

/// An LDS spouse sealing ordinance (`SLGS`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LdsSpouseSealing {
    pub date: Option<String>,
    pub place: Option<String>,
    pub status: Option<String>,
    pub temple: Option<String>,
    pub citations: Option<Vec<Citation>>,
    pub notes: Option<Vec<Note>>,
    pub custom_tags: Option<Vec<CustomTag>>,
}
