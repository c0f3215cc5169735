//! Multimedia objects.
//!
//! The rules depend on the GEDCOM version the header declares:
//!
//! - **5.5**: the object is embedded. A non-empty blob and an embedded
//!   media format are required. Citations are not allowed.
//! - **5.5.1**: the object links files. At least one file reference is
//!   required, each with a file and a format. Blob and embedded format are
//!   not allowed. Citations are allowed and validated.
//!
//! When the version cannot be determined, repair assumes 5.5.1 and strict
//! mode skips the version-specific rules.

use ged_core::SupportedVersion;
use ged_model::{Element, FileReference, ListSlot, Multimedia, Subject};

use crate::context::ValidationContext;
use crate::validators::CitationValidator;

pub(crate) struct MultimediaValidator<'a> {
    ctx: &'a mut ValidationContext,
    multimedia: &'a mut Multimedia,
    top_level: bool,
}

impl<'a> MultimediaValidator<'a> {
    /// A record from the root's multimedia table.
    pub(crate) fn record(ctx: &'a mut ValidationContext, multimedia: &'a mut Multimedia) -> Self {
        Self {
            ctx,
            multimedia,
            top_level: true,
        }
    }

    /// An object embedded in another record. It carries no token.
    pub(crate) fn embedded(
        ctx: &'a mut ValidationContext,
        multimedia: &'a mut Multimedia,
    ) -> Self {
        Self {
            ctx,
            multimedia,
            top_level: false,
        }
    }

    pub(crate) fn validate(self) {
        let Self {
            ctx,
            multimedia,
            top_level,
        } = self;
        let subject = multimedia.subject();

        if top_level {
            ctx.check_xref(multimedia.xref.as_deref(), "xref", &subject);
        }
        ctx.check_optional(
            multimedia.rec_id_number.as_deref(),
            "automated record id",
            &subject,
        );
        ctx.check_change_date(multimedia.change_date.as_mut());
        ctx.check_user_references(&mut multimedia.user_references, &subject);
        ctx.reconcile(&mut multimedia.citations, "citations", true, &subject);
        if let Some(continued) = multimedia.continued_object.as_mut() {
            MultimediaValidator::embedded(ctx, continued).validate();
        }
        ctx.reconcile(&mut multimedia.blob, "blob", false, &subject);
        ctx.check_notes(&mut multimedia.notes, &subject);
        ctx.check_custom_tags(&mut multimedia.custom_tags, &subject);

        let version = match ctx.version {
            Some(version) => version,
            None if ctx.repair() => {
                ctx.info(
                    "Was not able to determine GEDCOM version - assuming 5.5.1",
                    &subject,
                );
                SupportedVersion::V5_5_1
            }
            None => {
                ctx.error(
                    "Was not able to determine GEDCOM version - cannot validate multimedia objects",
                    &subject,
                );
                return;
            }
        };
        match version {
            SupportedVersion::V5_5 => check_embedded_5_5(ctx, multimedia, &subject),
            SupportedVersion::V5_5_1 => check_linked_5_5_1(ctx, multimedia, &subject),
        }
    }
}

fn check_embedded_5_5(ctx: &mut ValidationContext, multimedia: &mut Multimedia, subject: &Subject) {
    if multimedia.blob.peek().map_or(true, Vec::is_empty) {
        ctx.error(
            "Multimedia in GEDCOM 5.5 requires a non-empty blob",
            subject,
        );
    }
    ctx.check_required(
        multimedia.embedded_media_format.as_deref(),
        "embedded media format",
        subject,
    );
    if multimedia.citations.peek().is_some_and(|c| !c.is_empty()) {
        if ctx.repair() {
            multimedia.citations = Some(Vec::new());
            ctx.info(
                "Citations on Multimedia are not allowed in GEDCOM 5.5 - removed",
                subject,
            );
        } else {
            ctx.error("Citations on Multimedia are not allowed in GEDCOM 5.5", subject);
        }
    }
}

fn check_linked_5_5_1(
    ctx: &mut ValidationContext,
    multimedia: &mut Multimedia,
    subject: &Subject,
) {
    let absent = multimedia.file_references.is_absent();
    let references = ctx.reconcile(
        &mut multimedia.file_references,
        "file references",
        true,
        subject,
    );
    match references {
        Some(references) if !references.is_empty() => {
            for reference in references.iter_mut() {
                check_file_reference(ctx, reference);
            }
        }
        // Already reported as a null list.
        None if absent && ctx.options.collection_initialization => {}
        _ => ctx.error(
            "Multimedia in GEDCOM 5.5.1 requires at least one file reference",
            subject,
        ),
    }

    if multimedia.blob.peek().is_some_and(|b| !b.is_empty()) {
        if ctx.repair() {
            multimedia.blob = Some(Vec::new());
            ctx.info(
                "Blob on Multimedia is not allowed in GEDCOM 5.5.1 - cleared",
                subject,
            );
        } else {
            ctx.error("Blob on Multimedia is not allowed in GEDCOM 5.5.1", subject);
        }
    }
    if multimedia.embedded_media_format.is_some() {
        if ctx.repair() {
            multimedia.embedded_media_format = None;
            ctx.info(
                "Embedded media format on Multimedia is not allowed in GEDCOM 5.5.1 - cleared",
                subject,
            );
        } else {
            ctx.error(
                "Embedded media format on Multimedia is not allowed in GEDCOM 5.5.1",
                subject,
            );
        }
    }
    // The list itself was reconciled with the common fields.
    if let Some(citations) = multimedia.citations.peek_mut() {
        for citation in citations.iter_mut() {
            CitationValidator::new(ctx, citation).validate();
        }
    }
}

fn check_file_reference(ctx: &mut ValidationContext, reference: &mut FileReference) {
    let subject = reference.subject();
    ctx.check_required(
        reference.reference_to_file.as_deref(),
        "reference to file",
        &subject,
    );
    ctx.check_required(reference.format.as_deref(), "format", &subject);
    ctx.check_optional(reference.media_type.as_deref(), "media type", &subject);
    ctx.check_optional(reference.title.as_deref(), "title", &subject);
    ctx.check_custom_tags(&mut reference.custom_tags, &subject);
}
