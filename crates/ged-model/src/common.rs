//! Small substructures shared by many record kinds.

use serde::{Deserialize, Serialize};

use crate::Note;

/// Opaque custom-extension data (user-defined `_TAG` lines).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomTag {
    pub tag: String,
    pub value: Option<String>,
    pub children: Vec<CustomTag>,
}

/// When a record was last changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeDate {
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<Vec<Note>>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

/// A user-defined reference number on a record (`REFN`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UserReference {
    pub reference_num: Option<String>,
    pub reference_type: Option<String>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

impl UserReference {
    pub fn new(reference_num: impl Into<String>) -> Self {
        Self {
            reference_num: Some(reference_num.into()),
            ..Self::default()
        }
    }
}
