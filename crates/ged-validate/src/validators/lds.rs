use ged_model::{Element, LdsSpouseSealing};

use crate::context::ValidationContext;

pub(crate) struct LdsSpouseSealingValidator<'a> {
    ctx: &'a mut ValidationContext,
    sealing: &'a mut LdsSpouseSealing,
}

impl<'a> LdsSpouseSealingValidator<'a> {
    pub(crate) fn new(ctx: &'a mut ValidationContext, sealing: &'a mut LdsSpouseSealing) -> Self {
        Self { ctx, sealing }
    }

    pub(crate) fn validate(self) {
        let Self { ctx, sealing } = self;
        let subject = sealing.subject();

        ctx.check_citations(&mut sealing.citations, &subject);
        ctx.check_custom_tags(&mut sealing.custom_tags, &subject);
        ctx.check_optional(sealing.date.as_deref(), "date", &subject);
        ctx.check_optional(sealing.place.as_deref(), "place", &subject);
        ctx.check_optional(sealing.status.as_deref(), "status", &subject);
        ctx.check_optional(sealing.temple.as_deref(), "temple", &subject);
        ctx.check_notes(&mut sealing.notes, &subject);
    }
}
