//! The file header.
//!
//! Most header substructures are auto-created under repair and filled with
//! defaults: character set `ANSEL`, GEDCOM version 5.5.1, and `UNSPECIFIED`
//! for the producing system's identifiers. The header's submitter token
//! defaults to the first submitter in the root's table.

use std::collections::BTreeMap;

use ged_core::{
    is_valid_character_set_name, supported_character_set_names, SupportedVersion,
    DEFAULT_CHARACTER_SET,
};
use ged_model::{
    CharacterSet, Element, GedcomVersion, Header, HeaderSourceData, SourceSystem, Subject,
    Submitter,
};

use crate::context::{is_blank, ValidationContext};
use crate::validators::AddressValidator;

/// Placeholder for required identifiers the file did not supply.
const UNSPECIFIED: &str = "UNSPECIFIED";

pub(crate) struct HeaderValidator<'a> {
    ctx: &'a mut ValidationContext,
    header: &'a mut Header,
    submitters: &'a BTreeMap<String, Submitter>,
}

impl<'a> HeaderValidator<'a> {
    pub(crate) fn new(
        ctx: &'a mut ValidationContext,
        header: &'a mut Header,
        submitters: &'a BTreeMap<String, Submitter>,
    ) -> Self {
        Self {
            ctx,
            header,
            submitters,
        }
    }

    pub(crate) fn validate(self) {
        let Self {
            ctx,
            header,
            submitters,
        } = self;
        let subject = header.subject();

        check_character_set(ctx, &mut header.character_set, &subject);
        ctx.reconcile(&mut header.copyright_data, "copyright data", false, &subject);
        ctx.check_custom_tags(&mut header.custom_tags, &subject);
        ctx.check_optional(header.date.as_deref(), "date", &subject);
        ctx.check_optional(
            header.destination_system.as_deref(),
            "destination system",
            &subject,
        );
        ctx.check_optional(header.file_name.as_deref(), "file name", &subject);

        if !check_gedcom_version(ctx, &mut header.gedcom_version, &subject) {
            return;
        }

        ctx.check_notes(&mut header.notes, &subject);
        ctx.check_optional(header.language.as_deref(), "language", &subject);
        ctx.check_optional(header.place_hierarchy.as_deref(), "place hierarchy", &subject);
        check_source_system(ctx, &mut header.source_system, &subject);
        check_submitter(ctx, &mut header.submitter, submitters, &subject);
        ctx.check_optional_xref(header.submission.as_deref(), "submission", &subject);
        ctx.check_optional(header.time.as_deref(), "time", &subject);
    }
}

fn check_character_set(
    ctx: &mut ValidationContext,
    slot: &mut Option<CharacterSet>,
    header: &Subject,
) {
    if slot.is_none() {
        if ctx.repair() {
            *slot = Some(CharacterSet {
                character_set_name: Some(DEFAULT_CHARACTER_SET.to_string()),
                ..CharacterSet::default()
            });
            ctx.info("Character set on Header was null - repaired", header);
        } else {
            ctx.error("Character set on Header is null", header);
            return;
        }
    }
    let Some(character_set) = slot.as_mut() else {
        return;
    };
    let subject = character_set.subject();
    ctx.check_required_or_default(
        &mut character_set.character_set_name,
        "character set name",
        DEFAULT_CHARACTER_SET,
        &subject,
    );
    if let Some(name) = character_set.character_set_name.as_deref() {
        if !is_blank(Some(name)) && !is_valid_character_set_name(name) {
            ctx.error(
                format!(
                    "Character set name on CharacterSet is not one of the supported names ({})",
                    supported_character_set_names()
                ),
                &subject,
            );
        }
    }
    ctx.check_optional(character_set.version_num.as_deref(), "version number", &subject);
    ctx.check_custom_tags(&mut character_set.custom_tags, &subject);
}

/// Returns false when the remaining header checks cannot proceed.
fn check_gedcom_version(
    ctx: &mut ValidationContext,
    slot: &mut Option<GedcomVersion>,
    header: &Subject,
) -> bool {
    if slot.is_none() {
        if ctx.repair() {
            *slot = Some(GedcomVersion::new(SupportedVersion::NEWEST));
            ctx.info(
                format!(
                    "GEDCOM version on Header was null - defaulted to {}",
                    SupportedVersion::NEWEST
                ),
                header,
            );
        } else {
            ctx.error("GEDCOM version on Header is null", header);
            return false;
        }
    }
    let Some(version) = slot.as_mut() else {
        return false;
    };
    let subject = version.subject();
    if version.version_number.is_none() {
        if ctx.repair() {
            version.version_number = Some(SupportedVersion::NEWEST);
            ctx.info(
                format!(
                    "version number on GedcomVersion was null - defaulted to {}",
                    SupportedVersion::NEWEST
                ),
                &subject,
            );
        } else {
            ctx.error("version number on GedcomVersion is required, but is null", &subject);
        }
    }
    ctx.check_optional(version.gedcom_form.as_deref(), "GEDCOM form", &subject);
    ctx.check_custom_tags(&mut version.custom_tags, &subject);
    true
}

fn check_source_system(
    ctx: &mut ValidationContext,
    slot: &mut Option<SourceSystem>,
    header: &Subject,
) {
    if slot.is_none() {
        if ctx.repair() {
            *slot = Some(SourceSystem::default());
            ctx.info("Source system on Header was null - repaired", header);
        } else {
            ctx.error("Source system on Header is null", header);
            return;
        }
    }
    let Some(system) = slot.as_mut() else {
        return;
    };
    let subject = system.subject();
    ctx.check_required_or_default(&mut system.system_id, "system id", UNSPECIFIED, &subject);
    ctx.check_optional(system.product_name.as_deref(), "product name", &subject);
    ctx.check_optional(system.version_num.as_deref(), "version number", &subject);

    if let Some(corporation) = system.corporation.as_mut() {
        let corporation_subject = corporation.subject();
        ctx.check_required_or_default(
            &mut corporation.business_name,
            "business name",
            UNSPECIFIED,
            &corporation_subject,
        );
        if let Some(address) = corporation.address.as_mut() {
            AddressValidator::new(ctx, address).validate();
        }
        ctx.check_contact_lists(
            &mut corporation.emails,
            &mut corporation.fax_numbers,
            &mut corporation.phone_numbers,
            &mut corporation.www_urls,
            &corporation_subject,
        );
        ctx.check_custom_tags(&mut corporation.custom_tags, &corporation_subject);
    }

    if let Some(data) = system.source_data.as_mut() {
        check_header_source_data(ctx, data);
    }
    ctx.check_custom_tags(&mut system.custom_tags, &subject);
}

fn check_header_source_data(ctx: &mut ValidationContext, data: &mut HeaderSourceData) {
    let subject = data.subject();
    ctx.check_required_or_default(&mut data.name, "name", UNSPECIFIED, &subject);
    ctx.check_optional(data.copyright.as_deref(), "copyright", &subject);
    ctx.check_optional(data.publish_date.as_deref(), "publish date", &subject);
    ctx.check_custom_tags(&mut data.custom_tags, &subject);
}

fn check_submitter(
    ctx: &mut ValidationContext,
    token: &mut Option<String>,
    submitters: &BTreeMap<String, Submitter>,
    header: &Subject,
) {
    if is_blank(token.as_deref()) {
        match submitters.keys().next() {
            Some(first) if ctx.repair() => {
                *token = Some(first.clone());
                ctx.info(
                    format!("Submitter on Header was null - set to first submitter {first}"),
                    header,
                );
            }
            _ => {
                ctx.check_required(token.as_deref(), "submitter", header);
                return;
            }
        }
    }
    let Some(token) = token.as_deref() else {
        return;
    };
    ctx.check_xref(Some(token), "submitter", header);
    if !submitters.contains_key(token) {
        ctx.error(
            format!("Submitter {token} on Header is not in the submitters table"),
            header,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;
    use ged_core::ValidationOptions;

    fn submitters() -> BTreeMap<String, Submitter> {
        let mut table = BTreeMap::new();
        table.insert("@U1@".to_string(), Submitter::new("@U1@", "Jane"));
        table
    }

    fn run(options: ValidationOptions, header: &mut Header) -> ValidationContext {
        let mut ctx = ValidationContext::new(options);
        let submitters = submitters();
        HeaderValidator::new(&mut ctx, header, &submitters).validate();
        ctx
    }

    #[test]
    fn test_empty_header_repaired_with_defaults() {
        let mut header = Header::default();
        let ctx = run(ValidationOptions::default(), &mut header);
        assert!(!ctx.findings.has_errors(), "{:?}", ctx.findings);

        let character_set = header.character_set.as_ref().unwrap();
        assert_eq!(character_set.character_set_name.as_deref(), Some("ANSEL"));
        assert_eq!(header.version(), Some(SupportedVersion::V5_5_1));
        let system = header.source_system.as_ref().unwrap();
        assert_eq!(system.system_id.as_deref(), Some("UNSPECIFIED"));
        assert_eq!(header.submitter.as_deref(), Some("@U1@"));
    }

    #[test]
    fn test_strict_missing_version_stops_checks() {
        let mut header = Header {
            character_set: Some(CharacterSet {
                character_set_name: Some("UTF-8".into()),
                custom_tags: Some(Vec::new()),
                ..CharacterSet::default()
            }),
            copyright_data: Some(Vec::new()),
            custom_tags: Some(Vec::new()),
            ..Header::default()
        };
        let ctx = run(ValidationOptions::strict(), &mut header);
        let descriptions: Vec<&str> = ctx.findings.iter().map(|f| f.description.as_str()).collect();
        assert_eq!(descriptions, vec!["GEDCOM version on Header is null"]);
    }

    #[test]
    fn test_unsupported_character_set() {
        let mut header = Header {
            character_set: Some(CharacterSet {
                character_set_name: Some("EBCDIC".into()),
                ..CharacterSet::default()
            }),
            ..Header::default()
        };
        let ctx = run(ValidationOptions::default(), &mut header);
        assert_eq!(ctx.findings.count(Severity::Error), 1);
        assert!(ctx.findings.iter().any(|f| f.description
            == "Character set name on CharacterSet is not one of the supported names (ANSEL, ASCII, UNICODE, UTF-8)"));
    }

    #[test]
    fn test_unknown_header_submitter() {
        let mut header = Header {
            submitter: Some("@U9@".into()),
            ..Header::default()
        };
        let ctx = run(ValidationOptions::default(), &mut header);
        assert!(ctx
            .findings
            .iter()
            .any(|f| f.description == "Submitter @U9@ on Header is not in the submitters table"));
    }

    #[test]
    fn test_corporation_name_defaulted() {
        let mut header = Header {
            source_system: Some(SourceSystem {
                system_id: Some("MyApp".into()),
                corporation: Some(Default::default()),
                source_data: Some(Default::default()),
                ..SourceSystem::default()
            }),
            ..Header::default()
        };
        run(ValidationOptions::default(), &mut header);
        let system = header.source_system.unwrap();
        assert_eq!(system.system_id.as_deref(), Some("MyApp"));
        assert_eq!(
            system.corporation.and_then(|c| c.business_name).as_deref(),
            Some("UNSPECIFIED")
        );
        assert_eq!(
            system.source_data.and_then(|d| d.name).as_deref(),
            Some("UNSPECIFIED")
        );
    }
}
