use serde::{Deserialize, Serialize};

use crate::CustomTag;

/// A postal address. `lines` holds the free-form address text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub lines: Option<Vec<String>>,
    pub addr1: Option<String>,
    pub addr2: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub custom_tags: Option<Vec<CustomTag>>,
}
