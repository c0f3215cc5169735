//! # Identity Tokens (xrefs)
//!
//! Every addressable GEDCOM record carries a token such as `@I1@`. A token
//! is well formed when it is at least [`XREF_MIN_LENGTH`] characters long,
//! starts with [`XREF_DELIMITER`], and ends with it.
//!
//! The three conditions are independent. [`xref_defects()`] reports each
//! violated condition separately, so `"I"` yields three defects and `"I1@"`
//! yields one.

use serde::{Deserialize, Serialize};

/// The character that opens and closes an identity token.
pub const XREF_DELIMITER: char = '@';

/// Shortest well-formed token, in characters (`@X@`).
pub const XREF_MIN_LENGTH: usize = 3;

/// One way a token can fail the `@...@` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XrefDefect {
    /// Fewer than [`XREF_MIN_LENGTH`] characters.
    TooShort,
    /// First character is not [`XREF_DELIMITER`].
    MissingLeadingDelimiter,
    /// Last character is not [`XREF_DELIMITER`].
    MissingTrailingDelimiter,
}

impl XrefDefect {
    /// Message fragment following "xref on <Kind> ".
    pub fn describe(&self) -> &'static str {
        match self {
            Self::TooShort => "is too short to be a valid xref",
            Self::MissingLeadingDelimiter => "doesn't start with an at-sign (@)",
            Self::MissingTrailingDelimiter => "doesn't end with an at-sign (@)",
        }
    }
}

impl std::fmt::Display for XrefDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// Every defect in `token`, in the order: length, leading, trailing.
///
/// An empty result means the token is well formed. Length is measured in
/// characters, not bytes.
pub fn xref_defects(token: &str) -> Vec<XrefDefect> {
    let mut defects = Vec::new();
    if token.chars().count() < XREF_MIN_LENGTH {
        defects.push(XrefDefect::TooShort);
    }
    if !token.starts_with(XREF_DELIMITER) {
        defects.push(XrefDefect::MissingLeadingDelimiter);
    }
    if !token.ends_with(XREF_DELIMITER) {
        defects.push(XrefDefect::MissingTrailingDelimiter);
    }
    defects
}

/// Whether `token` has no defects.
pub fn is_well_formed(token: &str) -> bool {
    xref_defects(token).is_empty()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any delimited non-empty body is well formed.
        #[test]
        fn delimited_tokens_are_well_formed(body in "[A-Z0-9]{1,12}") {
            let token = format!("@{body}@");
            prop_assert!(xref_defects(&token).is_empty());
        }

        /// Each missing delimiter is reported on its own.
        #[test]
        fn undelimited_tokens_report_both_sides(body in "[A-Z0-9]{3,12}") {
            let defects = xref_defects(&body);
            prop_assert_eq!(defects.len(), 2);
            prop_assert!(defects.contains(&XrefDefect::MissingLeadingDelimiter));
            prop_assert!(defects.contains(&XrefDefect::MissingTrailingDelimiter));
        }

        /// Never more than three defects, never a repeated defect.
        #[test]
        fn defects_are_distinct(token in ".{0,16}") {
            let defects = xref_defects(&token);
            prop_assert!(defects.len() <= 3);
            let unique: std::collections::HashSet<_> = defects.iter().collect();
            prop_assert_eq!(unique.len(), defects.len());
        }
    }
}
