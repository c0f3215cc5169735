use ged_model::{Citation, Element};

use crate::context::{is_blank, ValidationContext};

/// Checks a citation of either kind.
pub(crate) struct CitationValidator<'a> {
    ctx: &'a mut ValidationContext,
    citation: &'a mut Citation,
}

impl<'a> CitationValidator<'a> {
    pub(crate) fn new(ctx: &'a mut ValidationContext, citation: &'a mut Citation) -> Self {
        Self { ctx, citation }
    }

    pub(crate) fn validate(self) {
        let Self { ctx, citation } = self;
        let subject = citation.subject();

        match citation {
            Citation::WithSource(c) => {
                ctx.check_xref(c.source.as_deref(), "source", &subject);
                ctx.check_optional(c.where_in_source.as_deref(), "where in source", &subject);
                ctx.check_optional(c.certainty.as_deref(), "certainty", &subject);
                ctx.check_optional(c.event_cited.as_deref(), "event cited", &subject);
                if is_blank(c.event_cited.as_deref()) {
                    if !is_blank(c.role_in_event.as_deref()) {
                        ctx.error(
                            format!(
                                "{} has role in event but no event cited",
                                subject.kind
                            ),
                            &subject,
                        );
                    }
                } else {
                    ctx.check_optional(c.role_in_event.as_deref(), "role in event", &subject);
                }
                ctx.check_notes(&mut c.notes, &subject);
                ctx.check_custom_tags(&mut c.custom_tags, &subject);
            }
            Citation::WithoutSource(c) => {
                ctx.reconcile(&mut c.description, "description", false, &subject);
                ctx.reconcile(&mut c.text_from_source, "text from source", true, &subject);
                ctx.check_notes(&mut c.notes, &subject);
                ctx.check_custom_tags(&mut c.custom_tags, &subject);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_core::ValidationOptions;
    use ged_model::{CitationWithSource, CitationWithoutSource};

    fn run(options: ValidationOptions, citation: &mut Citation) -> Vec<String> {
        let mut ctx = ValidationContext::new(options);
        CitationValidator::new(&mut ctx, citation).validate();
        ctx.findings.iter().map(|f| f.description.clone()).collect()
    }

    fn with_source(source: &str) -> CitationWithSource {
        CitationWithSource {
            source: Some(source.into()),
            notes: Some(Vec::new()),
            custom_tags: Some(Vec::new()),
            ..CitationWithSource::default()
        }
    }

    #[test]
    fn test_valid_citation_with_source() {
        let mut citation = Citation::WithSource(CitationWithSource {
            event_cited: Some("BIRT".into()),
            role_in_event: Some("CHIL".into()),
            ..with_source("@S1@")
        });
        assert!(run(ValidationOptions::strict(), &mut citation).is_empty());
    }

    #[test]
    fn test_source_token_required_and_shaped() {
        let mut citation = Citation::WithSource(with_source(""));
        assert_eq!(
            run(ValidationOptions::strict(), &mut citation),
            vec!["source on CitationWithSource is required, but is either null or blank"]
        );

        let mut citation = Citation::WithSource(with_source("S1@"));
        assert_eq!(
            run(ValidationOptions::strict(), &mut citation),
            vec!["source on CitationWithSource doesn't start with an at-sign (@)"]
        );
    }

    #[test]
    fn test_role_without_event_is_error() {
        let mut citation = Citation::WithSource(CitationWithSource {
            role_in_event: Some("HUSB".into()),
            ..with_source("@S1@")
        });
        assert_eq!(
            run(ValidationOptions::default(), &mut citation),
            vec!["CitationWithSource has role in event but no event cited"]
        );
    }

    #[test]
    fn test_citation_without_source_repairs_lists() {
        let block = vec!["quoted".to_string()];
        let mut citation = Citation::WithoutSource(CitationWithoutSource {
            text_from_source: Some(vec![block.clone(), block.clone()]),
            ..CitationWithoutSource::default()
        });
        let found = run(ValidationOptions::default(), &mut citation);
        assert_eq!(
            found,
            vec![
                "List of description on CitationWithoutSource was null - repaired",
                "1 duplicates in List of text from source on CitationWithoutSource found and removed",
                "List of notes on CitationWithoutSource was null - repaired",
                "Custom tag collection was null - repaired",
            ]
        );
        match citation {
            Citation::WithoutSource(c) => {
                assert_eq!(c.description, Some(Vec::new()));
                assert_eq!(c.text_from_source, Some(vec![block]));
            }
            Citation::WithSource(_) => unreachable!(),
        }
    }
}
