use ged_model::{Element, PersonalName, PersonalNameVariation, Subject};

use crate::context::ValidationContext;

pub(crate) struct PersonalNameValidator<'a> {
    ctx: &'a mut ValidationContext,
    name: &'a mut PersonalName,
}

impl<'a> PersonalNameValidator<'a> {
    pub(crate) fn new(ctx: &'a mut ValidationContext, name: &'a mut PersonalName) -> Self {
        Self { ctx, name }
    }

    pub(crate) fn validate(self) {
        let Self { ctx, name } = self;
        let subject = name.subject();

        ctx.check_required(name.basic.as_deref(), "basic name", &subject);
        check_name_parts(
            ctx,
            [
                (name.given_name.as_deref(), "given name"),
                (name.nickname.as_deref(), "nickname"),
                (name.prefix.as_deref(), "prefix"),
                (name.suffix.as_deref(), "suffix"),
                (name.surname.as_deref(), "surname"),
                (name.surname_prefix.as_deref(), "surname prefix"),
            ],
            &subject,
        );
        ctx.check_custom_tags(&mut name.custom_tags, &subject);
        ctx.check_citations(&mut name.citations, &subject);
        ctx.check_notes(&mut name.notes, &subject);

        for (slot, list_name) in [
            (&mut name.phonetic, "phonetic"),
            (&mut name.romanized, "romanized"),
        ] {
            if let Some(variations) = ctx.reconcile(slot, list_name, true, &subject) {
                for variation in variations.iter_mut() {
                    check_variation(ctx, variation);
                }
            }
        }
    }
}

fn check_name_parts(
    ctx: &mut ValidationContext,
    parts: [(Option<&str>, &str); 6],
    subject: &Subject,
) {
    for (value, field) in parts {
        ctx.check_optional(value, field, subject);
    }
}

fn check_variation(ctx: &mut ValidationContext, variation: &mut PersonalNameVariation) {
    let subject = variation.subject();
    ctx.check_required(variation.variation.as_deref(), "variation", &subject);
    ctx.check_optional(
        variation.variation_type.as_deref(),
        "variation type",
        &subject,
    );
    check_name_parts(
        ctx,
        [
            (variation.given_name.as_deref(), "given name"),
            (variation.nickname.as_deref(), "nickname"),
            (variation.prefix.as_deref(), "prefix"),
            (variation.suffix.as_deref(), "suffix"),
            (variation.surname.as_deref(), "surname"),
            (variation.surname_prefix.as_deref(), "surname prefix"),
        ],
        &subject,
    );
    ctx.check_citations(&mut variation.citations, &subject);
    ctx.check_notes(&mut variation.notes, &subject);
    ctx.check_custom_tags(&mut variation.custom_tags, &subject);
}
