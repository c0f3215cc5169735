use serde::{Deserialize, Serialize};

use crate::{
    ChangeDate, Citation, CustomTag, IndividualAttribute, IndividualEvent, MultimediaLink, Note,
    PersonalName, UserReference,
};

/// An individual record (`INDI`).
///
/// Family membership is recorded by family token in `families_where_child`
/// and `families_where_spouse`; the family records themselves live in the
/// root's family table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Individual {
    pub xref: Option<String>,
    pub sex: Option<String>,
    pub names: Option<Vec<PersonalName>>,
    pub families_where_child: Option<Vec<FamilyChild>>,
    pub families_where_spouse: Option<Vec<FamilySpouse>>,
    pub aliases: Option<Vec<String>>,
    pub associations: Option<Vec<Association>>,
    pub citations: Option<Vec<Citation>>,
    pub attributes: Option<Vec<IndividualAttribute>>,
    pub events: Option<Vec<IndividualEvent>>,
    /// Tokens of submitters interested in this individual's ancestors.
    pub ancestor_interest: Option<Vec<String>>,
    /// Tokens of submitters interested in this individual's descendants.
    pub descendant_interest: Option<Vec<String>>,
    pub multimedia: Option<Vec<MultimediaLink>>,
    pub notes: Option<Vec<Note>>,
    pub user_references: Option<Vec<UserReference>>,
    pub rec_id_number: Option<String>,
    pub permanent_rec_file_number: Option<String>,
    pub restriction_notice: Option<String>,
    pub change_date: Option<ChangeDate>,
    pub custom_tags: Option<Vec<CustomTag>>,
}

impl Individual {
    pub fn with_xref(xref: impl Into<String>) -> Self {
        Self {
            xref: Some(xref.into()),
            ..Self::default()
        }
    }
}

/// Membership of an individual in a family as a child (`FAMC`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyChild {
    pub family: Option<String>,
    pub pedigree: Option<String>,
    pub status: Option<String>,
    pub adopted_by: Option<AdoptedBy>,
    pub notes: Option<Vec<Note>>,
}

impl FamilyChild {
    pub fn of(family: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdoptedBy {
    Husband,
    Wife,
    Both,
}

/// Membership of an individual in a family as a spouse (`FAMS`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilySpouse {
    pub family: Option<String>,
    pub notes: Option<Vec<Note>>,
}

impl FamilySpouse {
    pub fn of(family: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            ..Self::default()
        }
    }
}

/// A link from an individual to an associated record (`ASSO`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Association {
    pub associated_entity_type: Option<String>,
    pub associated_entity_xref: Option<String>,
    pub relationship: Option<String>,
    pub citations: Option<Vec<Citation>>,
    pub notes: Option<Vec<Note>>,
    pub custom_tags: Option<Vec<CustomTag>>,
}
