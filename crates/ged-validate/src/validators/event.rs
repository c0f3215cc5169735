use ged_model::{EventDetail, Subject};

use crate::context::ValidationContext;
use crate::validators::{AddressValidator, PlaceValidator};

/// Checks the body shared by individual events, individual attributes, and
/// family events. Findings are attributed to the owning event.
pub(crate) struct EventValidator<'a> {
    ctx: &'a mut ValidationContext,
    detail: &'a mut EventDetail,
    subject: &'a Subject,
}

impl<'a> EventValidator<'a> {
    pub(crate) fn new(
        ctx: &'a mut ValidationContext,
        detail: &'a mut EventDetail,
        subject: &'a Subject,
    ) -> Self {
        Self {
            ctx,
            detail,
            subject,
        }
    }

    pub(crate) fn validate(self) {
        let Self {
            ctx,
            detail,
            subject,
        } = self;

        if let Some(address) = detail.address.as_mut() {
            AddressValidator::new(ctx, address).validate();
        }
        for (value, field) in [
            (detail.age.as_deref(), "age"),
            (detail.cause.as_deref(), "cause"),
            (detail.date.as_deref(), "date"),
            (detail.religious_affiliation.as_deref(), "religious affiliation"),
            (detail.resp_agency.as_deref(), "responsible agency"),
            (detail.restriction_notice.as_deref(), "restriction notice"),
            (detail.sub_type.as_deref(), "subtype"),
        ] {
            ctx.check_optional(value, field, subject);
        }
        ctx.check_citations(&mut detail.citations, subject);
        ctx.check_custom_tags(&mut detail.custom_tags, subject);

        if detail
            .description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
        {
            ctx.error(
                format!(
                    "{} has a description, which is non-standard - remove it or move it to a note",
                    subject.kind
                ),
                subject,
            );
        }

        ctx.check_contact_lists(
            &mut detail.emails,
            &mut detail.fax_numbers,
            &mut detail.phone_numbers,
            &mut detail.www_urls,
            subject,
        );
        ctx.check_multimedia_links(&mut detail.multimedia, subject);
        ctx.check_notes(&mut detail.notes, subject);
        if let Some(place) = detail.place.as_mut() {
            PlaceValidator::new(ctx, place).validate();
        }
    }
}
