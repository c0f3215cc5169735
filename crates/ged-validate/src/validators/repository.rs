use ged_model::{Element, Repository};

use crate::context::ValidationContext;
use crate::validators::AddressValidator;

pub(crate) struct RepositoryValidator<'a> {
    ctx: &'a mut ValidationContext,
    repository: &'a mut Repository,
}

impl<'a> RepositoryValidator<'a> {
    pub(crate) fn new(ctx: &'a mut ValidationContext, repository: &'a mut Repository) -> Self {
        Self { ctx, repository }
    }

    pub(crate) fn validate(self) {
        let Self { ctx, repository } = self;
        let subject = repository.subject();

        ctx.check_xref(repository.xref.as_deref(), "xref", &subject);
        ctx.check_required(repository.name.as_deref(), "name", &subject);
        if let Some(address) = repository.address.as_mut() {
            AddressValidator::new(ctx, address).validate();
        }
        ctx.check_contact_lists(
            &mut repository.emails,
            &mut repository.fax_numbers,
            &mut repository.phone_numbers,
            &mut repository.www_urls,
            &subject,
        );
        ctx.check_notes(&mut repository.notes, &subject);
        ctx.check_user_references(&mut repository.user_references, &subject);
        ctx.check_optional(
            repository.rec_id_number.as_deref(),
            "automated record id",
            &subject,
        );
        ctx.check_change_date(repository.change_date.as_mut());
        ctx.check_custom_tags(&mut repository.custom_tags, &subject);
    }
}
