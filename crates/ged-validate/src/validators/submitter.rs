use ged_model::{Element, Submission, Submitter};

use crate::context::ValidationContext;
use crate::validators::AddressValidator;

pub(crate) struct SubmitterValidator<'a> {
    ctx: &'a mut ValidationContext,
    submitter: &'a mut Submitter,
}

impl<'a> SubmitterValidator<'a> {
    pub(crate) fn new(ctx: &'a mut ValidationContext, submitter: &'a mut Submitter) -> Self {
        Self { ctx, submitter }
    }

    pub(crate) fn validate(self) {
        let Self { ctx, submitter } = self;
        let subject = submitter.subject();

        ctx.check_xref(submitter.xref.as_deref(), "xref", &subject);
        ctx.check_required(submitter.name.as_deref(), "name", &subject);

        ctx.check_required_string_list(
            &mut submitter.language_pref,
            "language preferences",
            "language pref",
            &subject,
        );
        let max = ctx.options.max_language_prefs;
        if submitter.language_pref.as_ref().is_some_and(|prefs| prefs.len() > max) {
            ctx.error(
                format!("Submitter exceeds limit on language preferences ({max})"),
                &subject,
            );
        }

        ctx.check_optional(
            submitter.rec_id_number.as_deref(),
            "automated record id",
            &subject,
        );
        ctx.check_optional(
            submitter.reg_file_number.as_deref(),
            "registration file number",
            &subject,
        );
        if let Some(address) = submitter.address.as_mut() {
            AddressValidator::new(ctx, address).validate();
        }
        ctx.check_contact_lists(
            &mut submitter.emails,
            &mut submitter.fax_numbers,
            &mut submitter.phone_numbers,
            &mut submitter.www_urls,
            &subject,
        );
        ctx.check_notes(&mut submitter.notes, &subject);
        ctx.check_change_date(submitter.change_date.as_mut());
        ctx.check_custom_tags(&mut submitter.custom_tags, &subject);
    }
}

pub(crate) struct SubmissionValidator<'a> {
    ctx: &'a mut ValidationContext,
    submission: &'a mut Submission,
}

impl<'a> SubmissionValidator<'a> {
    pub(crate) fn new(ctx: &'a mut ValidationContext, submission: &'a mut Submission) -> Self {
        Self { ctx, submission }
    }

    pub(crate) fn validate(self) {
        let Self { ctx, submission } = self;
        let subject = submission.subject();

        ctx.check_xref(submission.xref.as_deref(), "xref", &subject);
        for (value, field) in [
            (submission.ancestors_count.as_deref(), "ancestors count"),
            (submission.descendants_count.as_deref(), "descendants count"),
            (submission.name_of_family_file.as_deref(), "name of family file"),
            (
                submission.ordinance_process_flag.as_deref(),
                "ordinance process flag",
            ),
            (submission.rec_id_number.as_deref(), "automated record id"),
            (submission.temple_code.as_deref(), "temple code"),
        ] {
            ctx.check_optional(value, field, &subject);
        }
        ctx.check_optional_xref(submission.submitter.as_deref(), "submitter", &subject);
        ctx.check_custom_tags(&mut submission.custom_tags, &subject);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;
    use ged_core::ValidationOptions;

    #[test]
    fn test_language_prefs_capped() {
        let mut ctx = ValidationContext::new(ValidationOptions::default());
        let mut submitter = Submitter {
            language_pref: Some(vec![
                "English".into(),
                "French".into(),
                "German".into(),
                "English".into(),
                "Dutch".into(),
            ]),
            ..Submitter::new("@U1@", "Jane")
        };
        SubmitterValidator::new(&mut ctx, &mut submitter).validate();
        assert_eq!(submitter.language_pref.as_ref().map(Vec::len), Some(4));
        assert!(ctx
            .findings
            .iter()
            .any(|f| f.description == "Submitter exceeds limit on language preferences (3)"));
    }

    #[test]
    fn test_language_pref_cap_follows_options() {
        let mut options = ValidationOptions::default();
        options.max_language_prefs = 5;
        let mut ctx = ValidationContext::new(options);
        let mut submitter = Submitter {
            language_pref: Some(vec!["a".into(), "b".into(), "c".into(), "d".into()]),
            ..Submitter::new("@U1@", "Jane")
        };
        SubmitterValidator::new(&mut ctx, &mut submitter).validate();
        assert!(!ctx.findings.has_errors());
    }

    #[test]
    fn test_submitter_name_required() {
        let mut ctx = ValidationContext::new(ValidationOptions::default());
        let mut submitter = Submitter::new("@U1@", " ");
        SubmitterValidator::new(&mut ctx, &mut submitter).validate();
        assert_eq!(ctx.findings.count(Severity::Error), 1);
    }

    #[test]
    fn test_submission_submitter_token_shape() {
        let mut ctx = ValidationContext::new(ValidationOptions::strict());
        let mut submission = Submission {
            submitter: Some("@U1".into()),
            custom_tags: Some(Vec::new()),
            ..Submission::with_xref("@SUBN1@")
        };
        SubmissionValidator::new(&mut ctx, &mut submission).validate();
        let descriptions: Vec<&str> = ctx.findings.iter().map(|f| f.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec!["submitter on Submission doesn't end with an at-sign (@)"]
        );
    }
}
