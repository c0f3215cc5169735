use ged_model::{Element, Place, PlaceNameVariation};

use crate::context::ValidationContext;

/// Checks a place and its phonetic and romanized variations. The place
/// name has no default and is never repaired.
pub(crate) struct PlaceValidator<'a> {
    ctx: &'a mut ValidationContext,
    place: &'a mut Place,
}

impl<'a> PlaceValidator<'a> {
    pub(crate) fn new(ctx: &'a mut ValidationContext, place: &'a mut Place) -> Self {
        Self { ctx, place }
    }

    pub(crate) fn validate(self) {
        let Self { ctx, place } = self;
        let subject = place.subject();

        ctx.check_required(place.place_name.as_deref(), "place name", &subject);
        ctx.check_citations(&mut place.citations, &subject);
        ctx.check_custom_tags(&mut place.custom_tags, &subject);
        ctx.check_optional(place.latitude.as_deref(), "latitude", &subject);
        ctx.check_optional(place.longitude.as_deref(), "longitude", &subject);
        ctx.check_optional(place.place_format.as_deref(), "place format", &subject);
        ctx.check_notes(&mut place.notes, &subject);

        for (slot, name) in [
            (&mut place.phonetic, "phonetic"),
            (&mut place.romanized, "romanized"),
        ] {
            if let Some(variations) = ctx.reconcile(slot, name, true, &subject) {
                for variation in variations.iter_mut() {
                    check_variation(ctx, variation);
                }
            }
        }
    }
}

fn check_variation(ctx: &mut ValidationContext, variation: &mut PlaceNameVariation) {
    let subject = variation.subject();
    ctx.check_required(variation.variation.as_deref(), "variation", &subject);
    ctx.check_optional(
        variation.variation_type.as_deref(),
        "variation type",
        &subject,
    );
    ctx.check_custom_tags(&mut variation.custom_tags, &subject);
}
