//! # Findings
//!
//! A validation pass produces an ordered log of [`Finding`]s. The log is
//! append-only during a pass and cleared at the start of the next one.
//! Entries appear in the order the depth-first walk discovered them; the
//! same text may appear more than once when a shared substructure is
//! reached along two paths.

use std::fmt;

use serde::{Deserialize, Serialize};

use ged_model::Subject;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A defect that was not (or could not be) repaired.
    Error,
    /// Advisory: the graph is usable but suspicious.
    Warning,
    /// A repair that was made, or a note about an assumption.
    Info,
}

impl Severity {
    pub fn all() -> &'static [Severity] {
        &[Self::Error, Self::Warning, Self::Info]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub description: String,
    pub severity: Severity,
    /// The element the finding is about, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.severity.as_str().to_ascii_uppercase(),
            self.description
        )?;
        if let Some(subject) = &self.subject {
            write!(f, " ({subject})")?;
        }
        Ok(())
    }
}

/// The ordered finding log of one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Findings {
    entries: Vec<Finding>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding. Never deduplicates.
    pub fn record(
        &mut self,
        description: impl Into<String>,
        severity: Severity,
        subject: Option<Subject>,
    ) {
        let description = description.into();
        let subject_label = subject.as_ref().map(ToString::to_string).unwrap_or_default();
        tracing::debug!(
            severity = severity.as_str(),
            subject = %subject_label,
            "{description}"
        );
        metrics::counter!("ged_validation_findings_total", "severity" => severity.as_str())
            .increment(1);
        self.entries.push(Finding {
            description,
            severity,
            subject,
        });
    }

    pub fn error(&mut self, description: impl Into<String>, subject: Option<Subject>) {
        self.record(description, Severity::Error, subject);
    }

    pub fn warning(&mut self, description: impl Into<String>, subject: Option<Subject>) {
        self.record(description, Severity::Warning, subject);
    }

    pub fn info(&mut self, description: impl Into<String>, subject: Option<Subject>) {
        self.record(description, Severity::Info, subject);
    }

    pub fn has_errors(&self) -> bool {
        self.has(Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.has(Severity::Warning)
    }

    pub fn has_info(&self) -> bool {
        self.has(Severity::Info)
    }

    fn has(&self, severity: Severity) -> bool {
        self.entries.iter().any(|f| f.severity == severity)
    }

    /// Number of findings at `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Finding] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a Findings {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
