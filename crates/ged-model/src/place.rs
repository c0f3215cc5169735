use serde::{Deserialize, Serialize};

use crate::{Citation, CustomTag, Note};

/// A place (`PLAC`) attached to an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    pub place_name: Option<String>,
    pub place_format: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub citations: Option<Vec<Citation>>,
    pub notes: Option<Vec<Note>>,
    pub phonetic: Option<Vec<PlaceNameVariation>>,
    pub romanized: Option<Vec<PlaceNameVariation>>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

impl Place {
    pub fn named(place_name: impl Into<String>) -> Self {
        Self {
            place_name: Some(place_name.into()),
            ..Self::default()
        }
    }
}

/// A phonetic or romanized rendering of a place name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceNameVariation {
    pub variation: Option<String>,
    pub variation_type: Option<String>,
    pub custom_tags: Option<Vec<CustomTag>>,
}
