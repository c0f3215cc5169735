use ged_model::{Address, Element};

use crate::context::ValidationContext;

pub(crate) struct AddressValidator<'a> {
    ctx: &'a mut ValidationContext,
    address: &'a mut Address,
}

impl<'a> AddressValidator<'a> {
    pub(crate) fn new(ctx: &'a mut ValidationContext, address: &'a mut Address) -> Self {
        Self { ctx, address }
    }

    pub(crate) fn validate(self) {
        let Self { ctx, address } = self;
        let subject = address.subject();

        ctx.reconcile(&mut address.lines, "lines", false, &subject);
        ctx.check_optional(address.addr1.as_deref(), "address line 1", &subject);
        ctx.check_optional(address.addr2.as_deref(), "address line 2", &subject);
        ctx.check_optional(address.city.as_deref(), "city", &subject);
        ctx.check_optional(address.state_province.as_deref(), "state/province", &subject);
        ctx.check_optional(address.postal_code.as_deref(), "postal code", &subject);
        ctx.check_optional(address.country.as_deref(), "country", &subject);
        ctx.check_custom_tags(&mut address.custom_tags, &subject);
    }
}
