//! End-to-end passes over whole record graphs.

use ged_core::{SupportedVersion, ValidationOptions};
use ged_model::{
    Citation, Family, FamilyChild, FamilyEvent, FamilySpouse, FileReference, Gedcom,
    GedcomVersion, Individual, IndividualEvent, Multimedia, MultimediaLink, Note, PersonalName,
    Place, Repository, RepositoryCitation, Source, Submitter,
};
use ged_validate::{Finding, GedcomValidator, Severity};

// ── Fixtures ─────────────────────────────────────────────────────────

fn multimedia_for(version: SupportedVersion) -> Multimedia {
    match version {
        SupportedVersion::V5_5 => Multimedia {
            blob: Some(vec!["R0lGODlhAQABAIAAAP".into()]),
            embedded_media_format: Some("gif".into()),
            ..Multimedia::with_xref("@M1@")
        },
        SupportedVersion::V5_5_1 => Multimedia {
            file_references: Some(vec![FileReference::new("portrait.jpg", "jpg")]),
            ..Multimedia::with_xref("@M1@")
        },
    }
}

/// A small family with every record kind represented.
fn sample(version: SupportedVersion) -> Gedcom {
    let mut gedcom = Gedcom::minimal("@SUBN1@");
    if let Some(header) = gedcom.header.as_mut() {
        header.gedcom_version = Some(GedcomVersion::new(version));
    }

    let mut birth = IndividualEvent::new("BIRT");
    birth.detail.date = Some("12 MAR 1901".into());
    birth.detail.place = Some(Place::named("Springfield, Illinois"));

    let husband = Individual {
        names: Some(vec![PersonalName::new("John /Smith/")]),
        families_where_spouse: Some(vec![FamilySpouse::of("@F1@")]),
        events: Some(vec![birth]),
        ..Individual::with_xref("@I1@")
    };
    let wife = Individual {
        names: Some(vec![PersonalName::new("Mary /Jones/")]),
        families_where_spouse: Some(vec![FamilySpouse::of("@F1@")]),
        multimedia: Some(vec![MultimediaLink::reference("@M1@")]),
        ..Individual::with_xref("@I2@")
    };
    let child = Individual {
        names: Some(vec![PersonalName::new("Alice /Smith/")]),
        families_where_child: Some(vec![FamilyChild::of("@F1@")]),
        citations: Some(vec![Citation::with_source("@S1@")]),
        notes: Some(vec![Note::reference("@N1@")]),
        ..Individual::with_xref("@I3@")
    };
    let family = Family {
        husband: Some("@I1@".into()),
        wife: Some("@I2@".into()),
        children: Some(vec!["@I3@".into()]),
        events: Some(vec![FamilyEvent::new("MARR")]),
        ..Family::with_xref("@F1@")
    };
    let source = Source {
        title: Some(vec!["Parish register".into()]),
        repository_citation: Some(RepositoryCitation {
            repository_xref: Some("@R1@".into()),
            ..RepositoryCitation::default()
        }),
        ..Source::with_xref("@S1@")
    };
    let note = Note {
        xref: Some("@N1@".into()),
        lines: Some(vec!["Research notes".into()]),
        ..Note::default()
    };

    gedcom
        .add_submitter(Submitter::new("@U1@", "Jane Doe"))
        .add_individual(husband)
        .add_individual(wife)
        .add_individual(child)
        .add_family(family)
        .add_source(source)
        .add_repository(Repository::new("@R1@", "County Archive"))
        .add_note(note)
        .add_multimedia(multimedia_for(version));
    gedcom
}

/// The sample after one repair pass.
fn repaired(version: SupportedVersion) -> Gedcom {
    let mut gedcom = sample(version);
    let mut validator = GedcomValidator::new(&mut gedcom, ValidationOptions::default());
    validator.validate();
    assert!(!validator.has_errors(), "{:?}", validator.findings());
    drop(validator);
    gedcom
}

fn run(gedcom: &mut Gedcom, options: ValidationOptions) -> Vec<Finding> {
    let mut validator = GedcomValidator::new(gedcom, options);
    validator.validate().iter().cloned().collect()
}

fn errors(findings: &[Finding]) -> Vec<&str> {
    findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .map(|f| f.description.as_str())
        .collect()
}

// ── Repair and idempotence ───────────────────────────────────────────

#[test]
fn test_repair_pass_materializes_and_second_pass_is_quiet() {
    for version in SupportedVersion::all() {
        let mut gedcom = sample(*version);
        let first = run(&mut gedcom, ValidationOptions::default());
        assert!(errors(&first).is_empty(), "{first:?}");
        assert!(first.iter().any(|f| f.severity == Severity::Info));

        let second = run(&mut gedcom, ValidationOptions::default());
        assert!(second.is_empty(), "second pass reported: {second:?}");
    }
}

#[test]
fn test_repaired_graph_passes_strict() {
    for version in SupportedVersion::all() {
        let mut gedcom = repaired(*version);
        let findings = run(&mut gedcom, ValidationOptions::strict());
        assert!(findings.is_empty(), "{findings:?}");
    }
}

#[test]
fn test_repair_removes_duplicates_everywhere() {
    let mut gedcom = sample(SupportedVersion::V5_5_1);
    let individual = gedcom.individuals.get_mut("@I3@").unwrap();
    individual.citations = Some(vec![
        Citation::with_source("@S1@"),
        Citation::with_source("@S1@"),
    ]);
    individual.aliases = Some(
        ["A", "B", "A", "C", "B"]
            .into_iter()
            .map(String::from)
            .collect(),
    );

    let findings = run(&mut gedcom, ValidationOptions::default());
    let individual = &gedcom.individuals["@I3@"];
    assert_eq!(individual.citations.as_ref().map(Vec::len), Some(1));
    assert_eq!(
        individual.aliases,
        Some(vec!["A".to_string(), "B".to_string(), "C".to_string()])
    );
    let dedup_infos: Vec<&Finding> = findings
        .iter()
        .filter(|f| f.description == "2 duplicates in List of aliases on Individual found and removed")
        .collect();
    assert_eq!(dedup_infos.len(), 1);
    assert_eq!(dedup_infos[0].severity, Severity::Info);
}

// ── Strict mode ──────────────────────────────────────────────────────

#[test]
fn test_strict_never_mutates() {
    for version in SupportedVersion::all() {
        let mut gedcom = sample(*version);
        if let Some(individual) = gedcom.individuals.get_mut("@I1@") {
            individual.aliases = Some(vec!["X".into(), "X".into(), " ".into()]);
        }
        let before = gedcom.clone();
        let findings = run(&mut gedcom, ValidationOptions::strict());
        assert!(!errors(&findings).is_empty());
        assert_eq!(gedcom, before);
    }
}

#[test]
fn test_strict_passes_are_identical() {
    let mut gedcom = sample(SupportedVersion::V5_5);
    let mut validator = GedcomValidator::new(&mut gedcom, ValidationOptions::strict());
    let first = validator.validate().clone();
    let second = validator.validate().clone();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

// ── Indexed tables ───────────────────────────────────────────────────

#[test]
fn test_mis_keyed_record_reported_once_and_skipped() {
    let mut gedcom = repaired(SupportedVersion::V5_5_1);
    gedcom
        .individuals
        .insert("@I9@".to_string(), Individual::with_xref("@I8@"));

    for options in [ValidationOptions::default(), ValidationOptions::strict()] {
        let findings = run(&mut gedcom, options);
        assert_eq!(
            errors(&findings),
            vec!["Entry '@I9@' in individuals table is not keyed by the Individual's xref"]
        );
        let entry = &gedcom.individuals["@I9@"];
        assert_eq!(entry.xref.as_deref(), Some("@I8@"));
        assert!(entry.names.is_none());
        assert!(!gedcom.individuals.contains_key("@I8@"));
    }
}

#[test]
fn test_mis_keyed_spouse_not_entered_through_family() {
    let mut gedcom = repaired(SupportedVersion::V5_5_1);
    gedcom
        .individuals
        .insert("@I1@".to_string(), Individual::with_xref("@I7@"));
    let findings = run(&mut gedcom, ValidationOptions::default());
    assert_eq!(errors(&findings).len(), 1);
    assert!(gedcom.individuals["@I1@"].names.is_none());
}

// ── Multimedia versions ──────────────────────────────────────────────

#[test]
fn test_multimedia_5_5_requires_embedded_content() {
    let mut gedcom = repaired(SupportedVersion::V5_5);
    if let Some(multimedia) = gedcom.multimedia.get_mut("@M1@") {
        multimedia.blob = Some(Vec::new());
    }
    let findings = run(&mut gedcom, ValidationOptions::default());
    assert_eq!(
        errors(&findings),
        vec!["Multimedia in GEDCOM 5.5 requires a non-empty blob"]
    );
}

#[test]
fn test_multimedia_5_5_1_clears_embedded_content() {
    let mut gedcom = repaired(SupportedVersion::V5_5_1);
    if let Some(multimedia) = gedcom.multimedia.get_mut("@M1@") {
        multimedia.blob = Some(vec!["AAAA".into()]);
        multimedia.embedded_media_format = Some("gif".into());
    }

    let strict = run(&mut gedcom, ValidationOptions::strict());
    assert_eq!(errors(&strict).len(), 2);

    let findings = run(&mut gedcom, ValidationOptions::default());
    assert!(errors(&findings).is_empty());
    let multimedia = &gedcom.multimedia["@M1@"];
    assert_eq!(multimedia.blob, Some(Vec::new()));
    assert!(multimedia.embedded_media_format.is_none());
}

#[test]
fn test_multimedia_version_changes_the_rules() {
    // A 5.5.1-shaped object checked under a 5.5 header.
    let mut gedcom = repaired(SupportedVersion::V5_5_1);
    if let Some(version) = gedcom
        .header
        .as_mut()
        .and_then(|header| header.gedcom_version.as_mut())
    {
        version.version_number = Some(SupportedVersion::V5_5);
    }
    let findings = run(&mut gedcom, ValidationOptions::strict());
    assert_eq!(
        errors(&findings),
        vec![
            "Multimedia in GEDCOM 5.5 requires a non-empty blob",
            "embedded media format on Multimedia is required, but is either null or blank",
        ]
    );
}

// ── Required strings and xrefs ───────────────────────────────────────

#[test]
fn test_required_string_one_error_under_both_policies() {
    for value in [None, Some(""), Some("   ")] {
        for options in [ValidationOptions::default(), ValidationOptions::strict()] {
            let mut gedcom = repaired(SupportedVersion::V5_5_1);
            if let Some(submitter) = gedcom.submitters.get_mut("@U1@") {
                submitter.name = value.map(String::from);
            }
            let findings = run(&mut gedcom, options);
            assert_eq!(
                errors(&findings),
                vec!["name on Submitter is required, but is either null or blank"]
            );
        }
    }
}

#[test]
fn test_xref_shapes() {
    let cases: [(&str, usize); 5] = [
        ("@I1@", 0),
        ("@I@", 0),
        ("I1@", 1),
        ("@I1", 1),
        ("I1", 3),
    ];
    for (token, expected) in cases {
        let mut gedcom = repaired(SupportedVersion::V5_5_1);
        let mut individual = gedcom.individuals["@I3@"].clone();
        individual.xref = Some(token.to_string());
        gedcom.individuals.insert(token.to_string(), individual);
        let findings = run(&mut gedcom, ValidationOptions::strict());
        assert_eq!(errors(&findings).len(), expected, "{token}: {findings:?}");
    }
}

#[test]
fn test_missing_place_name_never_repaired() {
    let mut gedcom = repaired(SupportedVersion::V5_5_1);
    if let Some(individual) = gedcom.individuals.get_mut("@I1@") {
        if let Some(place) = individual
            .events
            .as_mut()
            .and_then(|events| events.first_mut())
            .and_then(|event| event.detail.place.as_mut())
        {
            place.place_name = None;
        }
    }
    for _ in 0..2 {
        let findings = run(&mut gedcom, ValidationOptions::default());
        // The husband is reached from the table and again through the family.
        assert_eq!(
            errors(&findings),
            vec![
                "place name on Place is required, but is either null or blank",
                "place name on Place is required, but is either null or blank",
            ]
        );
    }
}
