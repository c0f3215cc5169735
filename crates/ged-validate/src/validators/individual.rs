//! Individual records.
//!
//! Family membership lists are reconciled here but the families they name
//! are not entered: the family validator descends into spouses, never the
//! other way round, so the individual/family cycle is walked once.

use ged_model::{Association, Element, FamilyChild, FamilySpouse, Individual};

use crate::context::ValidationContext;
use crate::validators::{EventValidator, PersonalNameValidator};

pub(crate) struct IndividualValidator<'a> {
    ctx: &'a mut ValidationContext,
    individual: &'a mut Individual,
}

impl<'a> IndividualValidator<'a> {
    pub(crate) fn new(ctx: &'a mut ValidationContext, individual: &'a mut Individual) -> Self {
        Self { ctx, individual }
    }

    pub(crate) fn validate(self) {
        let Self { ctx, individual } = self;
        let subject = individual.subject();

        ctx.check_xref(individual.xref.as_deref(), "xref", &subject);
        ctx.check_optional(individual.sex.as_deref(), "sex", &subject);

        if let Some(names) = ctx.reconcile(&mut individual.names, "names", true, &subject) {
            for name in names.iter_mut() {
                PersonalNameValidator::new(ctx, name).validate();
            }
        }

        if let Some(memberships) = ctx.reconcile(
            &mut individual.families_where_child,
            "families where child",
            true,
            &subject,
        ) {
            for membership in memberships.iter_mut() {
                check_family_child(ctx, membership);
            }
        }
        if let Some(memberships) = ctx.reconcile(
            &mut individual.families_where_spouse,
            "families where spouse",
            true,
            &subject,
        ) {
            for membership in memberships.iter_mut() {
                check_family_spouse(ctx, membership);
            }
        }

        ctx.check_string_list(&mut individual.aliases, "aliases", true, &subject);

        if let Some(associations) =
            ctx.reconcile(&mut individual.associations, "associations", true, &subject)
        {
            for association in associations.iter_mut() {
                check_association(ctx, association);
            }
        }

        ctx.check_citations(&mut individual.citations, &subject);

        if let Some(attributes) =
            ctx.reconcile(&mut individual.attributes, "attributes", true, &subject)
        {
            for attribute in attributes.iter_mut() {
                let attribute_subject = attribute.subject();
                ctx.check_required(
                    attribute.attribute_type.as_deref(),
                    "attribute type",
                    &attribute_subject,
                );
                ctx.check_optional(
                    attribute.description.as_deref(),
                    "description",
                    &attribute_subject,
                );
                EventValidator::new(ctx, &mut attribute.detail, &attribute_subject).validate();
            }
        }

        if let Some(events) = ctx.reconcile(&mut individual.events, "events", true, &subject) {
            for event in events.iter_mut() {
                let event_subject = event.subject();
                ctx.check_required(event.event_type.as_deref(), "event type", &event_subject);
                EventValidator::new(ctx, &mut event.detail, &event_subject).validate();
            }
        }

        for (slot, name) in [
            (&mut individual.ancestor_interest, "ancestor interest"),
            (&mut individual.descendant_interest, "descendant interest"),
        ] {
            if let Some(submitters) = ctx.reconcile(slot, name, true, &subject) {
                for token in submitters.iter() {
                    ctx.check_xref(Some(token.as_str()), "submitter", &subject);
                }
            }
        }

        ctx.check_notes(&mut individual.notes, &subject);
        ctx.check_multimedia_links(&mut individual.multimedia, &subject);
        ctx.check_user_references(&mut individual.user_references, &subject);
        ctx.check_optional(
            individual.rec_id_number.as_deref(),
            "automated record id",
            &subject,
        );
        ctx.check_optional(
            individual.permanent_rec_file_number.as_deref(),
            "permanent record file number",
            &subject,
        );
        ctx.check_optional(
            individual.restriction_notice.as_deref(),
            "restriction notice",
            &subject,
        );
        ctx.check_change_date(individual.change_date.as_mut());
        ctx.check_custom_tags(&mut individual.custom_tags, &subject);
    }
}

fn check_family_child(ctx: &mut ValidationContext, membership: &mut FamilyChild) {
    let subject = membership.subject();
    ctx.check_xref(membership.family.as_deref(), "family", &subject);
    ctx.check_optional(membership.pedigree.as_deref(), "pedigree", &subject);
    ctx.check_optional(membership.status.as_deref(), "status", &subject);
    ctx.check_notes(&mut membership.notes, &subject);
}

fn check_family_spouse(ctx: &mut ValidationContext, membership: &mut FamilySpouse) {
    let subject = membership.subject();
    ctx.check_xref(membership.family.as_deref(), "family", &subject);
    ctx.check_notes(&mut membership.notes, &subject);
}

fn check_association(ctx: &mut ValidationContext, association: &mut Association) {
    let subject = association.subject();
    ctx.check_required(
        association.associated_entity_type.as_deref(),
        "associated entity type",
        &subject,
    );
    ctx.check_xref(
        association.associated_entity_xref.as_deref(),
        "associated entity xref",
        &subject,
    );
    ctx.check_optional(association.relationship.as_deref(), "relationship", &subject);
    ctx.check_citations(&mut association.citations, &subject);
    ctx.check_notes(&mut association.notes, &subject);
    ctx.check_custom_tags(&mut association.custom_tags, &subject);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;
    use ged_core::ValidationOptions;
    use ged_model::{IndividualEvent, PersonalName};

    fn run(options: ValidationOptions, individual: &mut Individual) -> ValidationContext {
        let mut ctx = ValidationContext::new(options);
        IndividualValidator::new(&mut ctx, individual).validate();
        ctx
    }

    #[test]
    fn test_bare_individual_repaired_without_errors() {
        let mut individual = Individual::with_xref("@I1@");
        let ctx = run(ValidationOptions::default(), &mut individual);
        assert!(!ctx.findings.has_errors(), "{:?}", ctx.findings);
        assert!(ctx.findings.has_info());
        assert_eq!(individual.names, Some(Vec::new()));
        assert_eq!(individual.families_where_spouse, Some(Vec::new()));
        assert_eq!(individual.custom_tags, Some(Vec::new()));
    }

    #[test]
    fn test_bare_individual_strict_is_untouched() {
        let mut individual = Individual::with_xref("@I1@");
        let before = individual.clone();
        let ctx = run(ValidationOptions::strict(), &mut individual);
        assert_eq!(individual, before);
        assert!(ctx.findings.has_errors());
        assert!(!ctx.findings.has_info());
    }

    #[test]
    fn test_duplicate_names_removed() {
        let mut individual = Individual {
            names: Some(vec![
                PersonalName::new("A /B/"),
                PersonalName::new("A /B/"),
            ]),
            ..Individual::with_xref("@I1@")
        };
        let ctx = run(ValidationOptions::default(), &mut individual);
        assert_eq!(individual.names.as_ref().map(Vec::len), Some(1));
        assert!(ctx
            .findings
            .iter()
            .any(|f| f.description == "1 duplicates in List of names on Individual found and removed"));
    }

    #[test]
    fn test_event_type_required() {
        let mut individual = Individual {
            events: Some(vec![IndividualEvent::default()]),
            ..Individual::with_xref("@I1@")
        };
        let ctx = run(ValidationOptions::default(), &mut individual);
        assert_eq!(ctx.findings.count(Severity::Error), 1);
        assert!(ctx
            .findings
            .iter()
            .any(|f| f.description == "event type on IndividualEvent is required, but is either null or blank"));
    }

    #[test]
    fn test_interest_tokens_checked() {
        let mut individual = Individual {
            ancestor_interest: Some(vec!["@U1@".into(), "@U2".into()]),
            ..Individual::with_xref("@I1@")
        };
        let ctx = run(ValidationOptions::default(), &mut individual);
        assert_eq!(ctx.findings.count(Severity::Error), 1);
        assert!(ctx
            .findings
            .iter()
            .any(|f| f.description == "submitter on Individual doesn't end with an at-sign (@)"));
    }
}
