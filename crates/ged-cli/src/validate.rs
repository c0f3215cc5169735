//! # Validate Subcommand
//!
//! Loads a record graph, runs one validation pass over it, and reports
//! the findings.
//!
//! ## Options
//!
//! The pass runs with the defaults from `ValidationOptions`, overlaid by
//! an optional YAML options file (`--config`), overlaid by `--strict`,
//! which always turns repair off.
//!
//! ## Exit Codes
//!
//! - `0`: no Error findings.
//! - `1`: at least one Error finding.
//! - `2`: the graph or options could not be loaded or stored.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use ged_core::ValidationOptions;
use ged_validate::GedcomValidator;

use crate::graph_io::{load_graph, store_graph};
use crate::report::{render, OutputFormat};

/// Arguments for the `ged validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Record graph to validate (.json, .yaml or .yml).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Report defects without repairing them.
    #[arg(long)]
    pub strict: bool,

    /// How findings are printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Store the graph here after the pass. Repaired unless --strict.
    #[arg(long, value_name = "PATH")]
    pub write: Option<PathBuf>,

    /// YAML file of validation options.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Execute the validate subcommand, reporting on stdout.
///
/// Returns exit code: 0 on success, 1 on validation failure.
/// Operational failures are returned as errors.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_validate_to(args, &mut out)
}

/// Execute the validate subcommand, writing the report to `out`.
pub fn run_validate_to(args: &ValidateArgs, out: &mut dyn Write) -> Result<u8> {
    let options = resolve_options(args)?;
    tracing::info!(
        path = %args.path.display(),
        repair = options.repair_enabled,
        "validating record graph"
    );

    let mut gedcom = load_graph(&args.path)?;
    let mut validator = GedcomValidator::new(&mut gedcom, options);
    validator.validate();
    let failed = validator.has_errors();
    let findings = validator.into_findings();

    render(&findings, args.format, out).context("failed to write report")?;

    if let Some(target) = &args.write {
        store_graph(&gedcom, target)?;
    }

    Ok(if failed { 1 } else { 0 })
}

fn resolve_options(args: &ValidateArgs) -> Result<ValidationOptions> {
    let options = match &args.config {
        Some(path) => ValidationOptions::from_path(path)
            .with_context(|| format!("failed to load options from {}", path.display()))?,
        None => ValidationOptions::default(),
    };
    Ok(if args.strict {
        options.with_repair(false)
    } else {
        options
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_model::Gedcom;
    use std::path::Path;

    fn args(path: &Path) -> ValidateArgs {
        ValidateArgs {
            path: path.to_path_buf(),
            strict: false,
            format: OutputFormat::Text,
            write: None,
            config: None,
        }
    }

    fn write_graph(dir: &Path, name: &str, gedcom: &Gedcom) -> PathBuf {
        let path = dir.join(name);
        store_graph(gedcom, &path).unwrap();
        path
    }

    #[test]
    fn test_repair_pass_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_graph(dir.path(), "tree.json", &Gedcom::minimal("@SUBN1@"));
        let mut out = Vec::new();
        let code = run_validate_to(&args(&path), &mut out).unwrap();
        assert_eq!(code, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("INFO: Submitters collection was empty - repaired"));
        assert!(text.lines().last().unwrap().starts_with("0 error(s)"));
    }

    #[test]
    fn test_strict_pass_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_graph(dir.path(), "tree.yaml", &Gedcom::minimal("@SUBN1@"));
        let mut validate = args(&path);
        validate.strict = true;
        let mut out = Vec::new();
        let code = run_validate_to(&validate, &mut out).unwrap();
        assert_eq!(code, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ERROR: Submitters collection is empty"));
    }

    #[test]
    fn test_json_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_graph(dir.path(), "tree.json", &Gedcom::default());
        let mut validate = args(&path);
        validate.format = OutputFormat::Json;
        let mut out = Vec::new();
        let code = run_validate_to(&validate, &mut out).unwrap();
        assert_eq!(code, 1);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value["errors"].as_u64().unwrap() >= 1);
        assert!(value["findings"].as_array().is_some());
    }

    #[test]
    fn test_write_stores_repaired_graph() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_graph(dir.path(), "tree.json", &Gedcom::minimal("@SUBN1@"));
        let target = dir.path().join("repaired.yml");
        let mut validate = args(&path);
        validate.write = Some(target.clone());
        run_validate_to(&validate, &mut Vec::new()).unwrap();

        let mut repaired = load_graph(&target).unwrap();
        assert!(!repaired.submitters.is_empty());

        let mut second = GedcomValidator::new(&mut repaired, ValidationOptions::strict());
        second.validate();
        assert!(!second.has_errors(), "{:?}", second.findings());
    }

    #[test]
    fn test_config_file_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_graph(dir.path(), "tree.json", &Gedcom::minimal("@SUBN1@"));
        let config = dir.path().join("options.yaml");
        std::fs::write(&config, "repair_enabled: false\n").unwrap();
        let mut validate = args(&path);
        validate.config = Some(config);
        let code = run_validate_to(&validate, &mut Vec::new()).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn test_bad_config_is_operational_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_graph(dir.path(), "tree.json", &Gedcom::minimal("@SUBN1@"));
        let config = dir.path().join("options.yaml");
        std::fs::write(&config, "no_such_option: true\n").unwrap();
        let mut validate = args(&path);
        validate.config = Some(config);
        let err = run_validate_to(&validate, &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load options"));
    }

    #[test]
    fn test_unknown_extension_is_operational_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.ged");
        std::fs::write(&path, "0 HEAD\n").unwrap();
        assert!(run_validate_to(&args(&path), &mut Vec::new()).is_err());
    }
}
