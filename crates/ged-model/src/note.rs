use serde::{Deserialize, Serialize};

use crate::{ChangeDate, Citation, CustomTag, UserReference};

/// A note: either inline text (`lines`) or a pointer to a top-level note
/// record (`xref` with no lines).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    pub xref: Option<String>,
    pub lines: Option<Vec<String>>,
    pub citations: Option<Vec<Citation>>,
    pub user_references: Option<Vec<UserReference>>,
    pub rec_id_number: Option<String>,
    pub change_date: Option<ChangeDate>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

impl Note {
    /// An inline note holding `lines`.
    pub fn inline<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Some(lines.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// A pointer to the note record `xref`.
    pub fn reference(xref: impl Into<String>) -> Self {
        Self {
            xref: Some(xref.into()),
            ..Self::default()
        }
    }
}
