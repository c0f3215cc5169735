//! Source citations.
//!
//! A citation either points at a source record or carries its own text.
//! The two shapes are the two variants of [`Citation`]; there is no third.

use serde::{Deserialize, Serialize};

use crate::{CustomTag, Note};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Citation {
    /// Cites a source record by token.
    WithSource(CitationWithSource),
    /// Carries the cited text inline.
    WithoutSource(CitationWithoutSource),
}

impl Citation {
    /// A citation of the source record `source_xref`.
    pub fn with_source(source_xref: impl Into<String>) -> Self {
        Self::WithSource(CitationWithSource {
            source: Some(source_xref.into()),
            ..CitationWithSource::default()
        })
    }

    /// The notes slot shared by both variants.
    pub fn notes_mut(&mut self) -> &mut Option<Vec<Note>> {
        match self {
            Self::WithSource(c) => &mut c.notes,
            Self::WithoutSource(c) => &mut c.notes,
        }
    }

    /// The custom-tag slot shared by both variants.
    pub fn custom_tags_mut(&mut self) -> &mut Option<Vec<CustomTag>> {
        match self {
            Self::WithSource(c) => &mut c.custom_tags,
            Self::WithoutSource(c) => &mut c.custom_tags,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CitationWithSource {
    /// Token of the cited source record.
    pub source: Option<String>,
    pub where_in_source: Option<String>,
    pub event_cited: Option<String>,
    pub role_in_event: Option<String>,
    pub certainty: Option<String>,
    pub notes: Option<Vec<Note>>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CitationWithoutSource {
    pub description: Option<Vec<String>>,
    /// Blocks of quoted text, each a list of lines.
    pub text_from_source: Option<Vec<Vec<String>>>,
    pub notes: Option<Vec<Note>>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_tagged_by_kind() {
        let json = serde_json::to_value(Citation::with_source("@S1@")).unwrap();
        assert_eq!(json["kind"], "with_source");
        assert_eq!(json["source"], "@S1@");

        let parsed: Citation =
            serde_json::from_str(r#"{"kind":"without_source","description":["p. 12"]}"#).unwrap();
        match parsed {
            Citation::WithoutSource(c) => {
                assert_eq!(c.description, Some(vec!["p. 12".to_string()]));
                assert!(c.notes.is_none());
            }
            Citation::WithSource(_) => panic!("expected citation without source"),
        }
    }

    #[test]
    fn test_shared_slots() {
        let mut citation = Citation::with_source("@S1@");
        citation.notes_mut().get_or_insert_with(Vec::new).push(Note::inline(["n"]));
        match &citation {
            Citation::WithSource(c) => assert_eq!(c.notes.as_ref().map(Vec::len), Some(1)),
            Citation::WithoutSource(_) => unreachable!(),
        }
    }
}
