use std::collections::BTreeMap;

use ged_model::{Element, Family, Individual};

use crate::context::ValidationContext;
use crate::validators::{EventValidator, IndividualValidator, LdsSpouseSealingValidator};

/// Checks a family and descends into its husband and wife.
///
/// Spouses are looked up by token in the root's individual table and only
/// entered when that entry is keyed by its own token. Children are checked
/// as tokens only.
pub(crate) struct FamilyValidator<'a> {
    ctx: &'a mut ValidationContext,
    family: &'a mut Family,
    individuals: &'a mut BTreeMap<String, Individual>,
}

impl<'a> FamilyValidator<'a> {
    pub(crate) fn new(
        ctx: &'a mut ValidationContext,
        family: &'a mut Family,
        individuals: &'a mut BTreeMap<String, Individual>,
    ) -> Self {
        Self {
            ctx,
            family,
            individuals,
        }
    }

    pub(crate) fn validate(self) {
        let Self {
            ctx,
            family,
            individuals,
        } = self;
        let subject = family.subject();

        ctx.check_xref(family.xref.as_deref(), "xref", &subject);
        for (value, field) in [
            (family.automated_record_id.as_deref(), "automated record id"),
            (family.num_children.as_deref(), "number of children"),
            (family.rec_file_number.as_deref(), "record file number"),
            (family.restriction_notice.as_deref(), "restriction notice"),
        ] {
            ctx.check_optional(value, field, &subject);
        }
        ctx.check_change_date(family.change_date.as_mut());

        if let Some(children) = ctx.reconcile(&mut family.children, "children", true, &subject) {
            for child in children.iter() {
                ctx.check_xref(Some(child.as_str()), "child", &subject);
            }
        }

        ctx.check_citations(&mut family.citations, &subject);
        ctx.check_custom_tags(&mut family.custom_tags, &subject);

        if let Some(events) = ctx.reconcile(&mut family.events, "events", true, &subject) {
            for event in events.iter_mut() {
                let event_subject = event.subject();
                ctx.check_required(event.event_type.as_deref(), "event type", &event_subject);
                ctx.check_optional(event.husband_age.as_deref(), "husband's age", &event_subject);
                ctx.check_optional(event.wife_age.as_deref(), "wife's age", &event_subject);
                EventValidator::new(ctx, &mut event.detail, &event_subject).validate();
            }
        }

        for (spouse, role) in [
            (family.husband.as_deref(), "husband"),
            (family.wife.as_deref(), "wife"),
        ] {
            let Some(token) = spouse else {
                continue;
            };
            ctx.check_optional_xref(Some(token), role, &subject);
            match individuals.get_mut(token) {
                Some(individual) if individual.xref.as_deref() == Some(token) => {
                    IndividualValidator::new(ctx, individual).validate();
                }
                // Mis-keyed entries are reported by the individual table walk.
                Some(_) => {}
                None if token.trim().is_empty() => {}
                None => ctx.warning(
                    format!("{role} {token} on Family is not in the individuals table"),
                    &subject,
                ),
            }
        }

        if let Some(sealings) = ctx.reconcile(
            &mut family.lds_spouse_sealings,
            "LDS spouse sealings",
            true,
            &subject,
        ) {
            for sealing in sealings.iter_mut() {
                LdsSpouseSealingValidator::new(ctx, sealing).validate();
            }
        }

        ctx.check_multimedia_links(&mut family.multimedia, &subject);
        ctx.check_notes(&mut family.notes, &subject);

        if let Some(submitters) =
            ctx.reconcile(&mut family.submitters, "submitters", true, &subject)
        {
            for token in submitters.iter() {
                ctx.check_xref(Some(token.as_str()), "submitter", &subject);
            }
        }

        ctx.check_user_references(&mut family.user_references, &subject);
    }
}
