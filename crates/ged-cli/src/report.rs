//! Rendering a finding log for the terminal or for machines.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use ged_validate::{Finding, Findings, Severity};
use serde::Serialize;

/// How findings are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per finding, then a summary line.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Machine-readable report of one pass.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub findings: &'a [Finding],
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

impl<'a> Report<'a> {
    pub fn new(findings: &'a Findings) -> Self {
        Self {
            findings: findings.as_slice(),
            errors: findings.count(Severity::Error),
            warnings: findings.count(Severity::Warning),
            info: findings.count(Severity::Info),
        }
    }

    /// The closing line of the text report.
    pub fn summary(&self) -> String {
        format!(
            "{} error(s), {} warning(s), {} info",
            self.errors, self.warnings, self.info
        )
    }
}

/// Write the report for `findings` to `out`.
pub fn render(findings: &Findings, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let report = Report::new(findings);
    match format {
        OutputFormat::Text => {
            for finding in report.findings {
                writeln!(out, "{finding}")?;
            }
            writeln!(out, "{}", report.summary())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_model::{ElementKind, Subject};

    fn sample() -> Findings {
        let mut findings = Findings::new();
        findings.error(
            "name on Repository is required, but is either null or blank",
            Some(Subject::new(ElementKind::Repository)),
        );
        findings.info("Trailer was null - repaired", None);
        findings
    }

    #[test]
    fn test_text_report() {
        let mut out = Vec::new();
        render(&sample(), OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ERROR: name on Repository is required"));
        assert_eq!(lines[1], "INFO: Trailer was null - repaired");
        assert_eq!(lines[2], "1 error(s), 0 warning(s), 1 info");
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        render(&sample(), OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["errors"], 1);
        assert_eq!(value["warnings"], 0);
        assert_eq!(value["info"], 1);
        assert_eq!(value["findings"].as_array().unwrap().len(), 2);
        assert_eq!(value["findings"][0]["severity"], "error");
        assert_eq!(value["findings"][1]["description"], "Trailer was null - repaired");
    }

    #[test]
    fn test_empty_text_report() {
        let mut out = Vec::new();
        render(&Findings::new(), OutputFormat::Text, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0 error(s), 0 warning(s), 0 info\n"
        );
    }
}
