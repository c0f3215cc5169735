//! # Validation Session
//!
//! [`GedcomValidator`] is the root of a pass. It borrows the graph
//! mutably, owns the finding log and the options, and walks the graph's
//! top-level collections in a fixed order:
//!
//! 1. submitters
//! 2. header
//! 3. individuals
//! 4. families
//! 5. repositories
//! 6. multimedia
//! 7. notes
//! 8. sources
//! 9. submission
//! 10. trailer
//!
//! Submitters come before the header so that the header's submitter can
//! default to one of them. The header comes before multimedia so that its
//! declared version is known when the version-dependent rules run.
//!
//! ## Lifecycle
//!
//! ```text
//! NotStarted ──validate()──▶ InProgress ──▶ Completed
//!      ▲                                       │
//!      └──────────── validate() again ─────────┘
//! ```
//!
//! Every call clears the previous findings first. A repair pass followed by
//! a second pass reports nothing new for the defects the first one fixed.

use ged_core::ValidationOptions;
use ged_model::{Element, Gedcom, Submitter, Trailer};
use serde::{Deserialize, Serialize};

use crate::context::ValidationContext;
use crate::finding::{Findings, Severity};
use crate::validators::{
    FamilyValidator, HeaderValidator, IndividualValidator, MultimediaValidator, NoteValidator,
    RepositoryValidator, SourceValidator, SubmissionValidator, SubmitterValidator,
};

/// Token of the submitter created when a file has none.
pub const PLACEHOLDER_SUBMITTER_XREF: &str = "@SUBM0000@";

/// Name of the placeholder submitter.
pub const PLACEHOLDER_SUBMITTER_NAME: &str = "UNSPECIFIED";

/// Where a validator is in its pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassState {
    NotStarted,
    InProgress,
    Completed,
}

impl PassState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for PassState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates, and optionally repairs, one record graph.
pub struct GedcomValidator<'g> {
    gedcom: &'g mut Gedcom,
    ctx: ValidationContext,
    state: PassState,
}

impl<'g> GedcomValidator<'g> {
    pub fn new(gedcom: &'g mut Gedcom, options: ValidationOptions) -> Self {
        Self {
            gedcom,
            ctx: ValidationContext::new(options),
            state: PassState::NotStarted,
        }
    }

    /// Run a full pass. Previous findings are discarded.
    pub fn validate(&mut self) -> &Findings {
        self.state = PassState::NotStarted;
        self.ctx.findings.clear();
        self.ctx.version = None;

        let span = tracing::info_span!(
            "validate",
            repair = self.ctx.options.repair_enabled,
            records = self.gedcom.record_count()
        );
        let _entered = span.enter();
        self.state = PassState::InProgress;

        self.validate_submitters();
        self.validate_header();
        self.ctx.version = self.gedcom.header_version();
        self.validate_individuals();
        self.validate_families();
        self.validate_repositories();
        self.validate_multimedia();
        self.validate_notes();
        self.validate_sources();
        self.validate_submission();
        self.validate_trailer();

        self.state = PassState::Completed;
        tracing::info!(
            errors = self.ctx.findings.count(Severity::Error),
            warnings = self.ctx.findings.count(Severity::Warning),
            info = self.ctx.findings.count(Severity::Info),
            "validation pass complete"
        );
        &self.ctx.findings
    }

    pub fn findings(&self) -> &Findings {
        &self.ctx.findings
    }

    pub fn has_errors(&self) -> bool {
        self.ctx.findings.has_errors()
    }

    pub fn has_warnings(&self) -> bool {
        self.ctx.findings.has_warnings()
    }

    pub fn has_info(&self) -> bool {
        self.ctx.findings.has_info()
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.ctx.options
    }

    /// Change the repair policy for subsequent passes.
    pub fn set_repair_enabled(&mut self, repair_enabled: bool) {
        self.ctx.options.repair_enabled = repair_enabled;
    }

    pub fn state(&self) -> PassState {
        self.state
    }

    /// The graph, as left by the last pass.
    pub fn gedcom(&self) -> &Gedcom {
        self.gedcom
    }

    /// Give up the borrow of the graph, keeping the findings.
    pub fn into_findings(self) -> Findings {
        self.ctx.findings
    }

    fn validate_submitters(&mut self) {
        tracing::debug!(count = self.gedcom.submitters.len(), "checking submitters");
        let root = self.gedcom.subject();
        if self.gedcom.submitters.is_empty() {
            if self.ctx.repair() {
                self.gedcom.submitters.insert(
                    PLACEHOLDER_SUBMITTER_XREF.to_string(),
                    Submitter::new(PLACEHOLDER_SUBMITTER_XREF, PLACEHOLDER_SUBMITTER_NAME),
                );
                self.ctx.info("Submitters collection was empty - repaired", &root);
            } else {
                self.ctx.error("Submitters collection is empty", &root);
            }
        }
        for (key, submitter) in self.gedcom.submitters.iter_mut() {
            if self.ctx.check_key("submitters", key, submitter) {
                SubmitterValidator::new(&mut self.ctx, submitter).validate();
            }
        }
    }

    fn validate_header(&mut self) {
        tracing::debug!("checking header");
        let root = self.gedcom.subject();
        let Gedcom {
            header, submitters, ..
        } = &mut *self.gedcom;
        if header.is_none() {
            if self.ctx.repair() {
                *header = Some(Default::default());
                self.ctx.info("Header was null - repaired", &root);
            } else {
                self.ctx.error("GEDCOM header is null", &root);
                return;
            }
        }
        if let Some(header) = header.as_mut() {
            HeaderValidator::new(&mut self.ctx, header, submitters).validate();
        }
    }

    fn validate_individuals(&mut self) {
        tracing::debug!(count = self.gedcom.individuals.len(), "checking individuals");
        for (key, individual) in self.gedcom.individuals.iter_mut() {
            if self.ctx.check_key("individuals", key, individual) {
                IndividualValidator::new(&mut self.ctx, individual).validate();
            }
        }
    }

    fn validate_families(&mut self) {
        tracing::debug!(count = self.gedcom.families.len(), "checking families");
        let Gedcom {
            families,
            individuals,
            ..
        } = &mut *self.gedcom;
        for (key, family) in families.iter_mut() {
            if self.ctx.check_key("families", key, family) {
                FamilyValidator::new(&mut self.ctx, family, individuals).validate();
            }
        }
    }

    fn validate_repositories(&mut self) {
        tracing::debug!(count = self.gedcom.repositories.len(), "checking repositories");
        for (key, repository) in self.gedcom.repositories.iter_mut() {
            if self.ctx.check_key("repositories", key, repository) {
                RepositoryValidator::new(&mut self.ctx, repository).validate();
            }
        }
    }

    fn validate_multimedia(&mut self) {
        tracing::debug!(count = self.gedcom.multimedia.len(), "checking multimedia");
        for (key, multimedia) in self.gedcom.multimedia.iter_mut() {
            if self.ctx.check_key("multimedia", key, multimedia) {
                MultimediaValidator::record(&mut self.ctx, multimedia).validate();
            }
        }
    }

    fn validate_notes(&mut self) {
        tracing::debug!(count = self.gedcom.notes.len(), "checking notes");
        for (i, (key, note)) in self.gedcom.notes.iter_mut().enumerate() {
            if self.ctx.check_key("notes", key, note) {
                NoteValidator::record(&mut self.ctx, note, i + 1).validate();
            }
        }
    }

    fn validate_sources(&mut self) {
        tracing::debug!(count = self.gedcom.sources.len(), "checking sources");
        for (key, source) in self.gedcom.sources.iter_mut() {
            if self.ctx.check_key("sources", key, source) {
                SourceValidator::new(&mut self.ctx, source).validate();
            }
        }
    }

    fn validate_submission(&mut self) {
        let root = self.gedcom.subject();
        match self.gedcom.submission.as_mut() {
            Some(submission) => SubmissionValidator::new(&mut self.ctx, submission).validate(),
            None => self
                .ctx
                .error("Submission record on Gedcom is required, but is null", &root),
        }
    }

    fn validate_trailer(&mut self) {
        if self.gedcom.trailer.is_some() {
            return;
        }
        let root = self.gedcom.subject();
        if self.ctx.repair() {
            self.gedcom.trailer = Some(Trailer {});
            self.ctx.info("Trailer was null - repaired", &root);
        } else {
            self.ctx.error("GEDCOM trailer is null", &root);
        }
    }
}
