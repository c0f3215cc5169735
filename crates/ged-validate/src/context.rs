//! # Validation Context
//!
//! State shared by every validator during one pass: the options, the
//! finding log, and the GEDCOM version the header declared. Child
//! validators borrow the context mutably for the duration of their own
//! check, so a child can never exist outside a running pass.
//!
//! The methods here are the check primitives every rule is built from.
//! Messages name the element kind, e.g. `"name on Submitter is required,
//! but is either null or blank"`.

use std::hash::Hash;

use ged_core::{xref_defects, SupportedVersion, ValidationOptions};
use ged_model::{
    ChangeDate, Citation, CustomTag, Element, ListSlot, MultimediaLink, Note, Subject,
    UserReference,
};

use crate::finding::Findings;
use crate::reconcile::{count_duplicates, eliminate_duplicates};
use crate::validators::{CitationValidator, MultimediaValidator, NoteValidator};

pub(crate) struct ValidationContext {
    pub(crate) options: ValidationOptions,
    pub(crate) findings: Findings,
    /// Version declared by the header. Set once the header has been checked.
    pub(crate) version: Option<SupportedVersion>,
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

impl ValidationContext {
    pub(crate) fn new(options: ValidationOptions) -> Self {
        Self {
            options,
            findings: Findings::new(),
            version: None,
        }
    }

    pub(crate) fn repair(&self) -> bool {
        self.options.repair_enabled
    }

    pub(crate) fn error(&mut self, description: impl Into<String>, subject: &Subject) {
        self.findings.error(description, Some(subject.clone()));
    }

    pub(crate) fn warning(&mut self, description: impl Into<String>, subject: &Subject) {
        self.findings.warning(description, Some(subject.clone()));
    }

    pub(crate) fn info(&mut self, description: impl Into<String>, subject: &Subject) {
        self.findings.info(description, Some(subject.clone()));
    }

    // ── Scalar strings ──────────────────────────────────────────────

    /// Error if `value` is absent or all whitespace. Returns whether it passed.
    pub(crate) fn check_required(
        &mut self,
        value: Option<&str>,
        field: &str,
        subject: &Subject,
    ) -> bool {
        if is_blank(value) {
            self.error(
                format!(
                    "{field} on {} is required, but is either null or blank",
                    subject.kind
                ),
                subject,
            );
            return false;
        }
        true
    }

    /// Error if `value` is present but all whitespace.
    pub(crate) fn check_optional(&mut self, value: Option<&str>, field: &str, subject: &Subject) {
        if matches!(value, Some(v) if v.trim().is_empty()) {
            self.error(
                format!(
                    "{field} on {} is specified, but has a blank value",
                    subject.kind
                ),
                subject,
            );
        }
    }

    /// Required string with a fallback: under repair a blank value is
    /// replaced by `default`.
    pub(crate) fn check_required_or_default(
        &mut self,
        value: &mut Option<String>,
        field: &str,
        default: &str,
        subject: &Subject,
    ) {
        if !is_blank(value.as_deref()) {
            return;
        }
        if self.repair() {
            *value = Some(default.to_string());
            self.info(
                format!(
                    "{field} on {} was blank - defaulted to {default}",
                    subject.kind
                ),
                subject,
            );
        } else {
            self.check_required(value.as_deref(), field, subject);
        }
    }

    // ── Identity tokens ─────────────────────────────────────────────

    /// Required token. A blank token yields only the required-string error;
    /// otherwise each shape defect is its own error.
    pub(crate) fn check_xref(&mut self, value: Option<&str>, field: &str, subject: &Subject) {
        if !self.check_required(value, field, subject) {
            return;
        }
        if let Some(token) = value {
            self.check_xref_shape(token, field, subject);
        }
    }

    /// Optional token: checked only when present.
    pub(crate) fn check_optional_xref(
        &mut self,
        value: Option<&str>,
        field: &str,
        subject: &Subject,
    ) {
        match value {
            None => {}
            Some(token) if token.trim().is_empty() => self.check_optional(value, field, subject),
            Some(token) => self.check_xref_shape(token, field, subject),
        }
    }

    fn check_xref_shape(&mut self, token: &str, field: &str, subject: &Subject) {
        for defect in xref_defects(token) {
            self.error(format!("{field} on {} {defect}", subject.kind), subject);
        }
    }

    /// The key of an indexed table entry must equal the record's own token.
    /// Returns whether the record may be checked further.
    pub(crate) fn check_key<E: Element>(&mut self, table: &str, key: &str, record: &E) -> bool {
        if record.xref() == Some(key) {
            return true;
        }
        let subject = record.subject();
        self.error(
            format!(
                "Entry '{key}' in {table} table is not keyed by the {}'s xref",
                subject.kind
            ),
            &subject,
        );
        false
    }

    // ── Lists ───────────────────────────────────────────────────────

    /// Ensure a list-valued field is present and, when `dedup` is set,
    /// free of value-equal entries.
    ///
    /// Returns the list for element-level checks, or `None` when it is
    /// absent and was not materialized.
    pub(crate) fn reconcile<'s, T, S>(
        &mut self,
        slot: &'s mut S,
        name: &str,
        dedup: bool,
        subject: &Subject,
    ) -> Option<&'s mut Vec<T>>
    where
        T: Eq + Hash,
        S: ListSlot<T> + ?Sized,
    {
        let kind = subject.kind;
        if slot.is_absent() {
            if !self.options.collection_initialization {
                return None;
            }
            if !self.repair() {
                self.error(format!("List of {name} on {kind} is null"), subject);
                return None;
            }
            slot.get_or_create();
            self.info(format!("List of {name} on {kind} was null - repaired"), subject);
        }
        let list = slot.peek_mut()?;
        if dedup {
            if self.repair() {
                let removed = eliminate_duplicates(list);
                if removed > 0 {
                    self.info(
                        format!("{removed} duplicates in List of {name} on {kind} found and removed"),
                        subject,
                    );
                }
            } else {
                let duplicates = count_duplicates(list);
                if duplicates > 0 {
                    self.error(
                        format!("{duplicates} duplicates in List of {name} on {kind}"),
                        subject,
                    );
                }
            }
        }
        Some(list)
    }

    pub(crate) fn check_custom_tags(
        &mut self,
        slot: &mut Option<Vec<CustomTag>>,
        subject: &Subject,
    ) {
        if slot.is_some() || !self.options.collection_initialization {
            return;
        }
        if self.repair() {
            *slot = Some(Vec::new());
            self.info("Custom tag collection was null - repaired", subject);
        } else {
            self.error(
                "Custom tag collection is null - must be at least an empty collection",
                subject,
            );
        }
    }

    /// A list of text entries where blank entries are not allowed.
    pub(crate) fn check_string_list(
        &mut self,
        slot: &mut Option<Vec<String>>,
        name: &str,
        dedup: bool,
        subject: &Subject,
    ) {
        let Some(list) = self.reconcile(slot, name, dedup, subject) else {
            return;
        };
        if !list.iter().any(|s| s.trim().is_empty()) {
            return;
        }
        if self.repair() {
            list.retain(|s| !s.trim().is_empty());
            self.info(
                format!(
                    "String list ({name}) on {} contains blank entry where none are allowed - removed",
                    subject.kind
                ),
                subject,
            );
        } else {
            self.error(
                format!(
                    "String list ({name}) on {} contains blank entry where none are allowed",
                    subject.kind
                ),
                subject,
            );
        }
    }

    /// A deduplicated list whose every entry is a required string.
    pub(crate) fn check_required_string_list(
        &mut self,
        slot: &mut Option<Vec<String>>,
        name: &str,
        entry_field: &str,
        subject: &Subject,
    ) {
        if let Some(list) = self.reconcile(slot, name, true, subject) {
            for entry in list.iter() {
                self.check_required(Some(entry.as_str()), entry_field, subject);
            }
        }
    }

    /// Email, fax, phone, and web lists, each through its own slot.
    pub(crate) fn check_contact_lists(
        &mut self,
        emails: &mut Option<Vec<String>>,
        fax_numbers: &mut Option<Vec<String>>,
        phone_numbers: &mut Option<Vec<String>>,
        www_urls: &mut Option<Vec<String>>,
        subject: &Subject,
    ) {
        self.check_string_list(emails, "emails", true, subject);
        self.check_string_list(fax_numbers, "fax numbers", true, subject);
        self.check_string_list(phone_numbers, "phone numbers", true, subject);
        self.check_string_list(www_urls, "www urls", true, subject);
    }

    // ── Shared substructures ────────────────────────────────────────

    pub(crate) fn check_change_date(&mut self, change_date: Option<&mut ChangeDate>) {
        let Some(change_date) = change_date else {
            return;
        };
        let subject = change_date.subject();
        self.check_required(change_date.date.as_deref(), "date", &subject);
        self.check_optional(change_date.time.as_deref(), "time", &subject);
        self.check_notes(&mut change_date.notes, &subject);
        self.check_custom_tags(&mut change_date.custom_tags, &subject);
    }

    pub(crate) fn check_notes(&mut self, slot: &mut Option<Vec<Note>>, owner: &Subject) {
        let Some(notes) = self.reconcile(slot, "notes", true, owner) else {
            return;
        };
        for (i, note) in notes.iter_mut().enumerate() {
            NoteValidator::new(self, note, i + 1).validate();
        }
    }

    pub(crate) fn check_citations(&mut self, slot: &mut Option<Vec<Citation>>, owner: &Subject) {
        let Some(citations) = self.reconcile(slot, "citations", true, owner) else {
            return;
        };
        for citation in citations.iter_mut() {
            CitationValidator::new(self, citation).validate();
        }
    }

    pub(crate) fn check_user_references(
        &mut self,
        slot: &mut Option<Vec<UserReference>>,
        owner: &Subject,
    ) {
        let Some(references) = self.reconcile(slot, "user references", true, owner) else {
            return;
        };
        for reference in references.iter_mut() {
            let subject = reference.subject();
            self.check_required(
                reference.reference_num.as_deref(),
                "reference number",
                &subject,
            );
            self.check_optional(reference.reference_type.as_deref(), "reference type", &subject);
            self.check_custom_tags(&mut reference.custom_tags, &subject);
        }
    }

    pub(crate) fn check_multimedia_links(
        &mut self,
        slot: &mut Option<Vec<MultimediaLink>>,
        owner: &Subject,
    ) {
        let Some(links) = self.reconcile(slot, "multimedia", true, owner) else {
            return;
        };
        for link in links.iter_mut() {
            match link {
                MultimediaLink::Reference { xref } => {
                    self.check_xref(Some(xref.as_str()), "multimedia reference", owner)
                }
                MultimediaLink::Embedded(multimedia) => {
                    MultimediaValidator::embedded(self, multimedia).validate()
                }
            }
        }
    }
}
