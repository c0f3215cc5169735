use serde::{Deserialize, Serialize};

use crate::{Citation, CustomTag, Note};

/// A personal name (`NAME`) on an individual.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalName {
    /// The name as written, surname between slashes.
    pub basic: Option<String>,
    pub given_name: Option<String>,
    pub nickname: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub surname: Option<String>,
    pub surname_prefix: Option<String>,
    pub citations: Option<Vec<Citation>>,
    pub notes: Option<Vec<Note>>,
    pub phonetic: Option<Vec<PersonalNameVariation>>,
    pub romanized: Option<Vec<PersonalNameVariation>>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

impl PersonalName {
    pub fn new(basic: impl Into<String>) -> Self {
        Self {
            basic: Some(basic.into()),
            ..Self::default()
        }
    }
}

/// A phonetic or romanized rendering of a personal name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalNameVariation {
    pub variation: Option<String>,
    pub variation_type: Option<String>,
    pub given_name: Option<String>,
    pub nickname: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub surname: Option<String>,
    pub surname_prefix: Option<String>,
    pub citations: Option<Vec<Citation>>,
    pub notes: Option<Vec<Note>>,
    pub custom_tags: Option<Vec<CustomTag>>,
}
