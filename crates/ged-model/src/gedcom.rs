//! # The Root Graph
//!
//! [`Gedcom`] holds one parsed file: the optional header, submission, and
//! trailer singletons plus the token-keyed record tables.
//!
//! ## Persistence
//!
//! The graph serializes with serde. JSON and YAML helpers wrap decode and
//! encode failures in [`GedError`] so callers at the edges handle one error
//! type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ged_core::{GedError, SupportedVersion};

use crate::{
    Family, Header, Individual, Multimedia, Note, Repository, Source, Submission, Submitter,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gedcom {
    pub header: Option<Header>,
    pub submitters: BTreeMap<String, Submitter>,
    pub individuals: BTreeMap<String, Individual>,
    pub families: BTreeMap<String, Family>,
    pub repositories: BTreeMap<String, Repository>,
    pub multimedia: BTreeMap<String, Multimedia>,
    pub notes: BTreeMap<String, Note>,
    pub sources: BTreeMap<String, Source>,
    pub submission: Option<Submission>,
    pub trailer: Option<Trailer>,
}

/// The end-of-file marker (`TRLR`). Carries no data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trailer {}

macro_rules! add_record {
    ($(#[$doc:meta])* $fn:ident, $table:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $fn(&mut self, record: $ty) -> &mut Self {
            let key = record.xref.clone().unwrap_or_default();
            self.$table.insert(key, record);
            self
        }
    };
}

impl Gedcom {
    /// An empty graph with a header, submission, and trailer in place.
    pub fn minimal(submission_xref: impl Into<String>) -> Self {
        Self {
            header: Some(Header::default()),
            submission: Some(Submission::with_xref(submission_xref)),
            trailer: Some(Trailer {}),
            ..Self::default()
        }
    }

    /// The version declared by the header, if any.
    pub fn header_version(&self) -> Option<SupportedVersion> {
        self.header.as_ref().and_then(Header::version)
    }

    add_record!(
        /// Insert a submitter keyed by its own token.
        add_submitter, submitters, Submitter
    );
    add_record!(
        /// Insert an individual keyed by its own token.
        add_individual, individuals, Individual
    );
    add_record!(add_family, families, Family);
    add_record!(add_repository, repositories, Repository);
    add_record!(add_multimedia, multimedia, Multimedia);
    add_record!(add_note, notes, Note);
    add_record!(add_source, sources, Source);

    /// Total number of records across all tables.
    pub fn record_count(&self) -> usize {
        self.submitters.len()
            + self.individuals.len()
            + self.families.len()
            + self.repositories.len()
            + self.multimedia.len()
            + self.notes.len()
            + self.sources.len()
    }

    pub fn from_json_str(json: &str) -> Result<Self, GedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, GedError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, GedError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, GedError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Citation, GedcomVersion, Note, PersonalName};

    fn sample() -> Gedcom {
        let mut gedcom = Gedcom::minimal("@SUBN1@");
        if let Some(header) = gedcom.header.as_mut() {
            header.gedcom_version = Some(GedcomVersion::new(SupportedVersion::V5_5));
        }
        let mut individual = Individual::with_xref("@I1@");
        individual.names = Some(vec![PersonalName::new("John /Smith/")]);
        individual.citations = Some(vec![Citation::with_source("@S1@")]);
        gedcom
            .add_submitter(Submitter::new("@SUBM1@", "Jane"))
            .add_individual(individual)
            .add_note(Note::reference("@N1@"));
        gedcom
    }

    #[test]
    fn test_add_keys_by_own_token() {
        let gedcom = sample();
        assert!(gedcom.individuals.contains_key("@I1@"));
        assert!(gedcom.submitters.contains_key("@SUBM1@"));
        assert!(gedcom.notes.contains_key("@N1@"));
        assert_eq!(gedcom.record_count(), 3);
    }

    #[test]
    fn test_header_version() {
        assert_eq!(sample().header_version(), Some(SupportedVersion::V5_5));
        assert_eq!(Gedcom::default().header_version(), None);
    }

    #[test]
    fn test_json_preserves_graph() {
        let gedcom = sample();
        let json = gedcom.to_json_string_pretty().unwrap();
        assert_eq!(Gedcom::from_json_str(&json).unwrap(), gedcom);
    }

    #[test]
    fn test_yaml_preserves_graph() {
        let gedcom = sample();
        let yaml = gedcom.to_yaml_string().unwrap();
        assert_eq!(Gedcom::from_yaml_str(&yaml).unwrap(), gedcom);
    }

    #[test]
    fn test_absent_lists_stay_absent_after_load() {
        let gedcom =
            Gedcom::from_json_str(r#"{"individuals": {"@I1@": {"xref": "@I1@"}}}"#).unwrap();
        let individual = &gedcom.individuals["@I1@"];
        assert!(individual.names.is_none());
        assert!(individual.custom_tags.is_none());
        assert!(gedcom.header.is_none());
    }

    #[test]
    fn test_trailer_serializes_as_empty_object() {
        let json = serde_json::to_value(Trailer {}).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = Gedcom::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, GedError::Serialization(_)));
    }
}
