use ged_model::{Element, Note};

use crate::context::ValidationContext;

/// Checks one note. `position` is the note's 1-based place in the list
/// that holds it and appears in messages about notes with no identity.
pub(crate) struct NoteValidator<'a> {
    ctx: &'a mut ValidationContext,
    note: &'a mut Note,
    position: usize,
    top_level: bool,
}

impl<'a> NoteValidator<'a> {
    pub(crate) fn new(ctx: &'a mut ValidationContext, note: &'a mut Note, position: usize) -> Self {
        Self {
            ctx,
            note,
            position,
            top_level: false,
        }
    }

    /// A note from the root's note table; its token is required.
    pub(crate) fn record(
        ctx: &'a mut ValidationContext,
        note: &'a mut Note,
        position: usize,
    ) -> Self {
        Self {
            top_level: true,
            ..Self::new(ctx, note, position)
        }
    }

    pub(crate) fn validate(self) {
        let Self {
            ctx,
            note,
            position,
            top_level,
        } = self;
        let subject = note.subject();

        if top_level {
            ctx.check_xref(note.xref.as_deref(), "xref", &subject);
        }

        let has_lines = ctx
            .reconcile(&mut note.lines, "lines", false, &subject)
            .map_or(false, |lines| !lines.is_empty());
        if note.xref.is_none() && !has_lines {
            ctx.error(format!("Note {position} without xref has no lines"), &subject);
        }

        ctx.check_optional(note.rec_id_number.as_deref(), "automated record id", &subject);
        ctx.check_citations(&mut note.citations, &subject);
        ctx.check_user_references(&mut note.user_references, &subject);
        ctx.check_change_date(note.change_date.as_mut());
        ctx.check_custom_tags(&mut note.custom_tags, &subject);
    }
}
