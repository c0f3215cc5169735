use serde::{Deserialize, Serialize};

use ged_core::SupportedVersion;

use crate::{Address, CustomTag, Note};

/// The file header (`HEAD`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub character_set: Option<CharacterSet>,
    pub copyright_data: Option<Vec<String>>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub destination_system: Option<String>,
    pub file_name: Option<String>,
    pub gedcom_version: Option<GedcomVersion>,
    pub language: Option<String>,
    pub place_hierarchy: Option<String>,
    pub notes: Option<Vec<Note>>,
    pub source_system: Option<SourceSystem>,
    /// Token of the primary submitter.
    pub submitter: Option<String>,
    /// Token of the submission record.
    pub submission: Option<String>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

impl Header {
    /// The declared version number, if the header declares one.
    pub fn version(&self) -> Option<SupportedVersion> {
        self.gedcom_version.as_ref().and_then(|v| v.version_number)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSet {
    pub character_set_name: Option<String>,
    pub version_num: Option<String>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GedcomVersion {
    pub version_number: Option<SupportedVersion>,
    pub gedcom_form: Option<String>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

impl GedcomVersion {
    pub fn new(version_number: SupportedVersion) -> Self {
        Self {
            version_number: Some(version_number),
            ..Self::default()
        }
    }
}

/// The program that produced the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSystem {
    pub system_id: Option<String>,
    pub product_name: Option<String>,
    pub version_num: Option<String>,
    pub corporation: Option<Corporation>,
    pub source_data: Option<HeaderSourceData>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Corporation {
    pub business_name: Option<String>,
    pub address: Option<Address>,
    pub emails: Option<Vec<String>>,
    pub fax_numbers: Option<Vec<String>>,
    pub phone_numbers: Option<Vec<String>>,
    pub www_urls: Option<Vec<String>>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderSourceData {
    pub name: Option<String>,
    pub copyright: Option<String>,
    pub publish_date: Option<String>,
    pub custom_tags: Option<Vec<CustomTag>>,
}
