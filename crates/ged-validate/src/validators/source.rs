use ged_model::{Element, RepositoryCitation, Source, SourceData};

use crate::context::{is_blank, ValidationContext};

pub(crate) struct SourceValidator<'a> {
    ctx: &'a mut ValidationContext,
    source: &'a mut Source,
}

impl<'a> SourceValidator<'a> {
    pub(crate) fn new(ctx: &'a mut ValidationContext, source: &'a mut Source) -> Self {
        Self { ctx, source }
    }

    pub(crate) fn validate(self) {
        let Self { ctx, source } = self;
        let subject = source.subject();

        ctx.check_xref(source.xref.as_deref(), "xref", &subject);
        ctx.check_change_date(source.change_date.as_mut());
        if let Some(data) = source.data.as_mut() {
            check_source_data(ctx, data);
        }
        ctx.check_multimedia_links(&mut source.multimedia, &subject);
        ctx.check_notes(&mut source.notes, &subject);
        ctx.check_string_list(
            &mut source.originators_authors,
            "originators/authors",
            false,
            &subject,
        );
        ctx.check_string_list(
            &mut source.publication_facts,
            "publication facts",
            false,
            &subject,
        );
        ctx.reconcile(&mut source.source_text, "source text", false, &subject);
        ctx.reconcile(&mut source.title, "title", false, &subject);
        ctx.check_optional(source.rec_id_number.as_deref(), "automated record id", &subject);
        ctx.check_optional(source.source_filed_by.as_deref(), "source filed by", &subject);
        ctx.check_user_references(&mut source.user_references, &subject);
        if let Some(citation) = source.repository_citation.as_mut() {
            check_repository_citation(ctx, citation);
        }
        ctx.check_custom_tags(&mut source.custom_tags, &subject);
    }
}

fn check_source_data(ctx: &mut ValidationContext, data: &mut SourceData) {
    let subject = data.subject();
    ctx.check_notes(&mut data.notes, &subject);
    ctx.check_optional(data.resp_agency.as_deref(), "responsible agency", &subject);
    if let Some(events) = ctx.reconcile(&mut data.events_recorded, "events recorded", true, &subject)
    {
        for event in events.iter_mut() {
            let event_subject = event.subject();
            ctx.check_optional(event.date_period.as_deref(), "date period", &event_subject);
            ctx.check_optional(event.event_type.as_deref(), "event type", &event_subject);
            ctx.check_optional(event.jurisdiction.as_deref(), "jurisdiction", &event_subject);
            ctx.check_custom_tags(&mut event.custom_tags, &event_subject);
        }
    }
    ctx.check_custom_tags(&mut data.custom_tags, &subject);
}

fn check_repository_citation(ctx: &mut ValidationContext, citation: &mut RepositoryCitation) {
    let subject = citation.subject();
    ctx.check_notes(&mut citation.notes, &subject);
    ctx.check_xref(
        citation.repository_xref.as_deref(),
        "repository xref",
        &subject,
    );
    if let Some(call_numbers) =
        ctx.reconcile(&mut citation.call_numbers, "call numbers", true, &subject)
    {
        for call_number in call_numbers.iter_mut() {
            let call_subject = call_number.subject();
            ctx.check_optional(call_number.call_number.as_deref(), "call number", &call_subject);
            ctx.check_optional(call_number.media_type.as_deref(), "media type", &call_subject);
            if is_blank(call_number.call_number.as_deref())
                && !is_blank(call_number.media_type.as_deref())
            {
                ctx.error(
                    "You cannot specify media type without a call number in a SourceCallNumber structure",
                    &call_subject,
                );
            }
            ctx.check_custom_tags(&mut call_number.custom_tags, &call_subject);
        }
    }
    ctx.check_custom_tags(&mut citation.custom_tags, &subject);
}
